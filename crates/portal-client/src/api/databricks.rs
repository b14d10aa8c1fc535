use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{endpoint, Error, Result};

const VALIDATION_FAILED_MESSAGE: &str = "Workspace name validation failed";

#[derive(Deserialize)]
struct ValidateWorkspaceNameResponse {
    #[serde(default)]
    available: bool,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[derive(Deserialize)]
struct GetWorkspaceNamesResponse {
    names: Vec<String>,
}

/// Asks the databricks backend whether `name` is free.
///
/// A 400 answer means the name is taken. Any status other than 200 and 400 is an error carrying the
/// backend's message.
pub async fn validate_workspace_name(client: &reqwest::Client, base_url: &Url, name: &str) -> Result<bool> {
    let url = endpoint(base_url, &format!("ws-validate/{}", urlencoding::encode(name)))?;
    let response = client.get(url).send().await?;

    match response.status() {
        StatusCode::OK => Ok(response.json::<ValidateWorkspaceNameResponse>().await?.available),
        StatusCode::BAD_REQUEST => Ok(false),
        status => {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| VALIDATION_FAILED_MESSAGE.to_owned());
            debug!(%status, "workspace name validation failed for \"{name}\": {message}");

            Err(Error::Rejected(message))
        }
    }
}

pub async fn get_workspace_names(client: &reqwest::Client, base_url: &Url) -> Result<Vec<String>> {
    let url = endpoint(base_url, "workspaces")?;
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| "Failed to fetch workspace names".to_owned());
        return Err(Error::Rejected(message));
    }

    Ok(response.json::<GetWorkspaceNamesResponse>().await?.names)
}
