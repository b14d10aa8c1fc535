use std::{sync::Arc, time::Duration};

use crate::{
    config::ApplicationConfig,
    domain::databricks::{CachedDatabricksClient, DatabricksClient, DatabricksClientConfig},
};

use self::workspace::{WorkspaceUseCase, WorkspaceUseCaseImpl};

pub(crate) mod workspace;

pub(crate) struct Application {
    databricks_client: Arc<dyn DatabricksClient + Sync + Send>,
}

impl Application {
    pub fn new(config: &ApplicationConfig) -> anyhow::Result<Self> {
        let databricks = &config.databricks;
        anyhow::ensure!(!databricks.account_id.is_empty(), "databricks.account_id is not configured");
        anyhow::ensure!(!databricks.client_id.is_empty(), "databricks.client_id is not configured");
        anyhow::ensure!(!databricks.client_secret.is_empty(), "databricks.client_secret is not configured");

        let databricks_client = CachedDatabricksClient::new(DatabricksClientConfig {
            base_url: databricks.base_url.clone(),
            account_id: databricks.account_id.to_owned(),
            client_id: databricks.client_id.to_owned(),
            client_secret: databricks.client_secret.to_owned(),
            token_ttl: Duration::from_secs(databricks.token_ttl),
            workspace_ttl: Duration::from_secs(databricks.workspace_ttl),
        });

        Ok(Self::with_databricks_client(Arc::new(databricks_client)))
    }

    pub fn with_databricks_client(databricks_client: Arc<dyn DatabricksClient + Sync + Send>) -> Self {
        Self { databricks_client }
    }

    pub fn workspace(&self) -> impl WorkspaceUseCase {
        WorkspaceUseCaseImpl::new(self.databricks_client.clone())
    }
}
