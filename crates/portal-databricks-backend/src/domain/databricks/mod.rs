use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use portal_common::workspace_name;

mod cache;
mod databricks_client;

pub(crate) use databricks_client::{CachedDatabricksClient, DatabricksClientConfig};

/// Access to the Databricks account API, as far as workspace provisioning needs it.
#[cfg_attr(test, automock)]
#[async_trait]
pub(crate) trait DatabricksClient {
    /// Returns a bearer token for the account API, fetching a new one through the
    /// client-credentials grant when the cached one is absent or expired.
    async fn access_token(&self) -> Result<String>;

    /// Returns the names of all existing workspaces in the account.
    async fn list_workspace_names_cached(&self) -> Result<Vec<String>>;

    /// Validates the syntax of `name` and reports whether no existing workspace
    /// uses it, ignoring case.
    async fn is_workspace_name_available(&self, name: &str) -> Result<bool>;
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum Error {
    #[error(transparent)]
    InvalidWorkspaceName(#[from] workspace_name::Error),

    #[error("Databricks token error: {0}")]
    TokenRequestFailed(u16),

    #[error("Databricks workspace error: {0}")]
    WorkspaceRequestFailed(u16),

    #[error("Failed to parse Databricks token response")]
    InvalidTokenResponse,

    #[error("Failed to parse Databricks workspaces response")]
    InvalidWorkspacesResponse,

    #[error("Databricks request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
