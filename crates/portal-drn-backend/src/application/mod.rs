use std::sync::Arc;

use crate::domain::drn::{DrnRepository, StaticDrnRepository};

use self::drn::{DrnUseCase, DrnUseCaseImpl};

pub(crate) mod drn;

pub(crate) struct Application {
    drn_repository: Arc<dyn DrnRepository + Sync + Send>,
}

impl Application {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::with_drn_repository(Arc::new(StaticDrnRepository::seeded()?)))
    }

    pub fn with_drn_repository(drn_repository: Arc<dyn DrnRepository + Sync + Send>) -> Self {
        Self { drn_repository }
    }

    pub fn drn(&self) -> impl DrnUseCase {
        DrnUseCaseImpl::new(self.drn_repository.clone())
    }
}
