use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use url::Url;

use super::CheckError;
use crate::api;

/// Performs one availability lookup for a composed workspace name.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AvailabilityChecker {
    async fn check(&self, name: &str) -> Result<bool, CheckError>;
}

/// Looks names up through the databricks backend's `/ws-validate` endpoint.
pub struct HttpAvailabilityChecker {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpAvailabilityChecker {
    pub fn new(base_url: Url) -> Self {
        Self { client: reqwest::Client::new(), base_url }
    }
}

#[async_trait]
impl AvailabilityChecker for HttpAvailabilityChecker {
    async fn check(&self, name: &str) -> Result<bool, CheckError> {
        Ok(api::databricks::validate_workspace_name(&self.client, &self.base_url, name).await?)
    }
}
