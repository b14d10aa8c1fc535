use async_trait::async_trait;
use portal_common::drn::Drn;

use super::{DrnRepository, Result};

const SEED_RECORDS: &str = include_str!("../../../static/drns.json");

/// In-memory record source seeded once at startup. Records are never mutated.
pub(crate) struct StaticDrnRepository {
    records: Vec<Drn>,
}

impl StaticDrnRepository {
    pub fn seeded() -> Result<Self> {
        Self::from_json(SEED_RECORDS)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self { records: serde_json::from_str(json)? })
    }
}

#[async_trait]
impl DrnRepository for StaticDrnRepository {
    async fn find_all(&self) -> Result<Vec<Drn>> {
        Ok(self.records.clone())
    }
}
