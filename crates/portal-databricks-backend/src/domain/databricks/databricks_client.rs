use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use portal_common::validate_workspace_name;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, error};
use url::Url;

use super::{cache::CacheSlot, DatabricksClient, Error, Result};
use crate::domain::clock::{Clock, SystemClock};

const GRANT_TYPE: &str = "client_credentials";
const SCOPE: &str = "all-apis";

pub(crate) struct DatabricksClientConfig {
    pub base_url: Url,
    pub account_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub token_ttl: Duration,
    pub workspace_ttl: Duration,
}

/// Databricks account API client holding two independent single-slot caches:
/// one for the bearer token and one for the workspace name list.
///
/// Refills do not hold a lock across the network call. Two requests that see
/// an expired slot at the same time may both refill it; the last write wins.
pub(crate) struct CachedDatabricksClient {
    http: reqwest::Client,
    base_url: String,
    account_id: String,
    client_id: String,
    client_secret: String,
    token_ttl: Duration,
    workspace_ttl: Duration,
    clock: Arc<dyn Clock>,
    token_cache: RwLock<CacheSlot<String>>,
    workspace_names_cache: RwLock<CacheSlot<Vec<String>>>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct WorkspaceResponse {
    workspace_name: Option<String>,
}

impl CachedDatabricksClient {
    pub fn new(config: DatabricksClientConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: DatabricksClientConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
            account_id: config.account_id,
            client_id: config.client_id,
            client_secret: config.client_secret,
            token_ttl: config.token_ttl,
            workspace_ttl: config.workspace_ttl,
            clock,
            token_cache: RwLock::new(CacheSlot::empty()),
            workspace_names_cache: RwLock::new(CacheSlot::empty()),
        }
    }

    fn token_url(&self) -> String {
        format!("{}/oidc/accounts/{}/v1/token", self.base_url, self.account_id)
    }

    fn workspaces_url(&self) -> String {
        format!("{}/api/2.0/accounts/{}/workspaces", self.base_url, self.account_id)
    }

    async fn fetch_access_token(&self) -> Result<String> {
        let form = [
            ("grant_type", GRANT_TYPE),
            ("scope", SCOPE),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        let response = self.http.post(self.token_url()).form(&form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "databricks token request failed.");
            return Err(Error::TokenRequestFailed(status.as_u16()));
        }

        let body = response.bytes().await?;
        let token = serde_json::from_slice::<TokenResponse>(&body).map_err(|e| {
            error!(error = %e, body = %String::from_utf8_lossy(&body), "failed to parse databricks token response.");
            Error::InvalidTokenResponse
        })?;

        if token.access_token.is_empty() {
            error!("databricks token response carried an empty access token.");
            return Err(Error::InvalidTokenResponse);
        }

        Ok(token.access_token)
    }

    async fn fetch_workspace_names(&self, token: &str) -> Result<Vec<String>> {
        let response = self.http.get(self.workspaces_url()).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "databricks workspace request failed.");
            return Err(Error::WorkspaceRequestFailed(status.as_u16()));
        }

        let body = response.bytes().await?;
        let workspaces = serde_json::from_slice::<Vec<WorkspaceResponse>>(&body).map_err(|e| {
            error!(error = %e, body = %String::from_utf8_lossy(&body), "failed to parse databricks workspaces response.");
            Error::InvalidWorkspacesResponse
        })?;

        Ok(workspaces
            .into_iter()
            .filter_map(|workspace| workspace.workspace_name)
            .filter(|name| !name.is_empty())
            .collect())
    }
}

#[async_trait]
impl DatabricksClient for CachedDatabricksClient {
    async fn access_token(&self) -> Result<String> {
        let now = self.clock.now();

        let cached = self.token_cache.read().await.get(now);
        if let Some(token) = cached {
            debug!("databricks token cache hit.");
            return Ok(token);
        }
        debug!("databricks token cache miss, fetching new token.");

        let token = self.fetch_access_token().await?;
        self.token_cache.write().await.store(token.clone(), now, self.token_ttl);

        Ok(token)
    }

    async fn list_workspace_names_cached(&self) -> Result<Vec<String>> {
        let now = self.clock.now();

        let cached = self.workspace_names_cache.read().await.get(now);
        if let Some(names) = cached {
            debug!("databricks workspace cache hit.");
            return Ok(names);
        }
        debug!("databricks workspace cache miss, fetching new names.");

        let token = self.access_token().await?;
        let names = self.fetch_workspace_names(&token).await?;
        self.workspace_names_cache.write().await.store(names.clone(), now, self.workspace_ttl);

        Ok(names)
    }

    async fn is_workspace_name_available(&self, name: &str) -> Result<bool> {
        let trimmed = name.trim();
        validate_workspace_name(trimmed)?;

        let names = self.list_workspace_names_cached().await?;
        let exists = names.iter().any(|existing| existing.eq_ignore_ascii_case(trimmed));

        Ok(!exists)
    }
}
