use std::sync::Arc;

use async_trait::async_trait;
use portal_common::workspace_name;

use crate::domain::databricks::{DatabricksClient, Error as DatabricksError};

#[async_trait]
pub(crate) trait WorkspaceUseCase {
    async fn is_name_available(&self, name: &str) -> Result<bool>;
    async fn get_all_names(&self) -> Result<Vec<String>>;
}

pub(crate) struct WorkspaceUseCaseImpl {
    databricks_client: Arc<dyn DatabricksClient + Sync + Send>,
}

impl WorkspaceUseCaseImpl {
    pub fn new(databricks_client: Arc<dyn DatabricksClient + Sync + Send>) -> Self {
        Self { databricks_client }
    }
}

#[async_trait]
impl WorkspaceUseCase for WorkspaceUseCaseImpl {
    async fn is_name_available(&self, name: &str) -> Result<bool> {
        Ok(self.databricks_client.is_workspace_name_available(name).await?)
    }

    async fn get_all_names(&self) -> Result<Vec<String>> {
        Ok(self.databricks_client.list_workspace_names_cached().await?)
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum Error {
    #[error(transparent)]
    InvalidWorkspaceName(workspace_name::Error),
    #[error(transparent)]
    Upstream(DatabricksError),
}

impl From<DatabricksError> for Error {
    fn from(value: DatabricksError) -> Self {
        match value {
            DatabricksError::InvalidWorkspaceName(e) => Self::InvalidWorkspaceName(e),
            e => Self::Upstream(e),
        }
    }
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use portal_common::workspace_name;

    use super::{Error, WorkspaceUseCase, WorkspaceUseCaseImpl};
    use crate::domain::databricks::{Error as DatabricksError, MockDatabricksClient};

    #[tokio::test]
    async fn when_checking_name_use_case_should_delegate_to_client() {
        const WORKSPACE_NAME: &str = "new-workspace";
        let mut databricks_client_mock = MockDatabricksClient::new();

        databricks_client_mock
            .expect_is_workspace_name_available()
            .withf(|name| name == WORKSPACE_NAME)
            .times(1)
            .returning(|_| Ok(true));

        let workspace_use_case = WorkspaceUseCaseImpl::new(Arc::new(databricks_client_mock));
        let result = workspace_use_case.is_name_available(WORKSPACE_NAME).await;

        assert!(matches!(result, Ok(true)));
    }

    #[tokio::test]
    async fn when_name_is_invalid_use_case_should_return_invalid_workspace_name_err() {
        let mut databricks_client_mock = MockDatabricksClient::new();

        databricks_client_mock
            .expect_is_workspace_name_available()
            .times(1)
            .returning(|_| Err(DatabricksError::InvalidWorkspaceName(workspace_name::Error::InvalidLength)));

        let workspace_use_case = WorkspaceUseCaseImpl::new(Arc::new(databricks_client_mock));
        let result = workspace_use_case.is_name_available("ab").await;

        assert!(matches!(result, Err(Error::InvalidWorkspaceName(workspace_name::Error::InvalidLength))));
        assert_eq!(result.err().unwrap().to_string(), "Workspace name must be between 3 and 64 characters.");
    }

    #[tokio::test]
    async fn when_upstream_fails_use_case_should_return_upstream_err() {
        let mut databricks_client_mock = MockDatabricksClient::new();

        databricks_client_mock
            .expect_list_workspace_names_cached()
            .times(1)
            .returning(|| Err(DatabricksError::WorkspaceRequestFailed(503)));

        let workspace_use_case = WorkspaceUseCaseImpl::new(Arc::new(databricks_client_mock));
        let result = workspace_use_case.get_all_names().await;

        assert!(matches!(result, Err(Error::Upstream(DatabricksError::WorkspaceRequestFailed(503)))));
        assert_eq!(result.err().unwrap().to_string(), "Databricks workspace error: 503");
    }

    #[tokio::test]
    async fn when_getting_names_succeed_use_case_should_return_names_in_order() {
        let mut databricks_client_mock = MockDatabricksClient::new();

        databricks_client_mock
            .expect_list_workspace_names_cached()
            .times(1)
            .returning(|| Ok(vec!["ws1".to_owned(), "ws2".to_owned()]));

        let workspace_use_case = WorkspaceUseCaseImpl::new(Arc::new(databricks_client_mock));
        let result = workspace_use_case.get_all_names().await;

        assert_eq!(result.expect("getting names should be successful"), vec!["ws1".to_owned(), "ws2".to_owned()]);
    }
}
