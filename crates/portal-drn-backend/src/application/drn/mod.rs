use std::sync::Arc;

use async_trait::async_trait;
use portal_common::drn::{Decision, Drn};
use tracing::info;

use crate::domain::drn::{DrnRepository, Error as DrnError};

#[async_trait]
pub(crate) trait DrnUseCase {
    /// Lists records awaiting approval, or every record when `include_approved` is set.
    async fn list_pending(&self, include_approved: bool) -> Result<Vec<Drn>>;
    async fn decide(&self, drn: &str, decision: Decision) -> Result<()>;
}

pub(crate) struct DrnUseCaseImpl {
    drn_repository: Arc<dyn DrnRepository + Sync + Send>,
}

impl DrnUseCaseImpl {
    pub fn new(drn_repository: Arc<dyn DrnRepository + Sync + Send>) -> Self {
        Self { drn_repository }
    }
}

#[async_trait]
impl DrnUseCase for DrnUseCaseImpl {
    async fn list_pending(&self, include_approved: bool) -> Result<Vec<Drn>> {
        let records = self.drn_repository.find_all().await?;
        if include_approved {
            return Ok(records);
        }

        Ok(records.into_iter().filter(|record| !record.approved).collect())
    }

    async fn decide(&self, drn: &str, decision: Decision) -> Result<()> {
        // Decisions are recorded in the log only; no record changes state.
        info!(drn, %decision, "DRN decision received: {drn} => {decision}");
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum Error {
    #[error(transparent)]
    Repository(#[from] DrnError),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use portal_common::drn::{Decision, Drn, DrnState};

    use super::{DrnUseCase, DrnUseCaseImpl, Error};
    use crate::domain::drn::{Error as DrnError, MockDrnRepository};

    fn drn(id: &str, approved: bool) -> Drn {
        Drn {
            drn: id.to_owned(),
            business_unit: "Engineering".to_owned(),
            requester_email: "jane.smith@example.com".to_owned(),
            architecture_review: "In Progress".to_owned(),
            approved,
            state: if approved { DrnState::Approved } else { DrnState::Pending },
            created_at: None,
        }
    }

    fn repository_returning(records: Vec<Drn>) -> MockDrnRepository {
        let mut drn_repository_mock = MockDrnRepository::new();
        drn_repository_mock.expect_find_all().times(1).returning(move || Ok(records.clone()));
        drn_repository_mock
    }

    #[tokio::test]
    async fn when_approved_are_excluded_use_case_should_return_unapproved_in_order() {
        let records = vec![drn("DRN001", false), drn("DRN002", true), drn("DRN003", false)];
        let drn_use_case = DrnUseCaseImpl::new(Arc::new(repository_returning(records)));

        let result = drn_use_case.list_pending(false).await.expect("listing drns should be successful");

        assert_eq!(result.iter().map(|r| r.drn.as_str()).collect::<Vec<_>>(), vec!["DRN001", "DRN003"]);
    }

    #[tokio::test]
    async fn when_approved_are_included_use_case_should_return_every_record() {
        let records = vec![drn("DRN001", false), drn("DRN002", true)];
        let drn_use_case = DrnUseCaseImpl::new(Arc::new(repository_returning(records.clone())));

        let result = drn_use_case.list_pending(true).await.expect("listing drns should be successful");

        assert_eq!(result, records);
    }

    #[tokio::test]
    async fn when_repository_fails_use_case_should_return_repository_err() {
        let mut drn_repository_mock = MockDrnRepository::new();
        drn_repository_mock.expect_find_all().times(1).returning(|| {
            Err(DrnError::InvalidRecords(
                serde_json::from_str::<Vec<Drn>>("{").expect_err("parsing should fail"),
            ))
        });
        let drn_use_case = DrnUseCaseImpl::new(Arc::new(drn_repository_mock));

        let result = drn_use_case.list_pending(false).await;

        assert!(matches!(result, Err(Error::Repository(DrnError::InvalidRecords(_)))));
    }

    #[tokio::test]
    async fn when_deciding_use_case_should_not_touch_repository() {
        let mut drn_repository_mock = MockDrnRepository::new();
        drn_repository_mock.expect_find_all().times(0);
        let drn_use_case = DrnUseCaseImpl::new(Arc::new(drn_repository_mock));

        let result = drn_use_case.decide("DRN001", Decision::Approve).await;

        assert!(result.is_ok());
    }
}
