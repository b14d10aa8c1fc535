use portal_common::drn::Decision;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PendingDrnsQuery {
    pub include_approved: Option<String>,
}

impl PendingDrnsQuery {
    /// Only the literal `true` opts in; any other value is treated as absent.
    pub fn include_approved(&self) -> bool {
        self.include_approved.as_deref() == Some("true")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostDecisionRequest {
    pub drn: String,
    pub decision: Decision,
}
