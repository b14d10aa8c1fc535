use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use portal_common::drn::Drn;

mod static_repository;

pub(crate) use static_repository::StaticDrnRepository;

/// Source of DRN records.
#[cfg_attr(test, automock)]
#[async_trait]
pub(crate) trait DrnRepository {
    /// Returns every known record in a stable order.
    async fn find_all(&self) -> Result<Vec<Drn>>;
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum Error {
    #[error("Failed to load DRN records: {0}")]
    InvalidRecords(#[from] serde_json::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
