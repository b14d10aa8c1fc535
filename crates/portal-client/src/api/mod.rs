//! Typed HTTP clients for the portal backends.

pub mod databricks;
pub mod drn;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The backend answered with an unexpected status; carries its error message.
    #[error("{0}")]
    Rejected(String),

    #[error("Failed to fetch DRNs: {0}")]
    FetchDrnsFailed(u16),

    #[error("Failed decision submit: {0}")]
    DecisionSubmitFailed(u16),

    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Appends `path` to `base_url`, keeping any path the base url already has.
fn endpoint(base_url: &url::Url, path: &str) -> Result<url::Url> {
    Ok(url::Url::parse(&format!("{}/{}", base_url.as_str().trim_end_matches('/'), path))?)
}
