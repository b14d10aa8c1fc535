use portal_common::drn::{Decision, Drn};
use serde::{Deserialize, Serialize};
use url::Url;

use super::{endpoint, Error, Result};

#[derive(Deserialize)]
struct ListPendingResponse {
    documents: Vec<Drn>,
}

#[derive(Serialize)]
struct PostDecisionRequest<'a> {
    drn: &'a str,
    decision: Decision,
}

/// Client of the DRN viewer backend.
pub struct DrnViewerClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DrnViewerClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub async fn list_pending(&self, include_approved: bool) -> Result<Vec<Drn>> {
        let mut url = endpoint(&self.base_url, "pending")?;
        url.set_query(Some(&format!("includeApproved={include_approved}")));

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::FetchDrnsFailed(response.status().as_u16()));
        }

        Ok(response.json::<ListPendingResponse>().await?.documents)
    }

    pub async fn decide(&self, drn: &str, decision: Decision) -> Result<()> {
        let url = endpoint(&self.base_url, "decision")?;

        let response = self.client.post(url).json(&PostDecisionRequest { drn, decision }).send().await?;
        if !response.status().is_success() {
            return Err(Error::DecisionSubmitFailed(response.status().as_u16()));
        }

        Ok(())
    }
}
