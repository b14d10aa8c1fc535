use axum::{http::StatusCode, response::IntoResponse};
use portal_common::drn::Drn;
use serde::Serialize;

use crate::server::response::error_payload;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PendingDrnsResponse {
    pub documents: Vec<Drn>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostDecisionResponse {
    pub ok: bool,
}

pub(super) struct InvalidDecisionErrorResponse {
    pub message: String,
}

impl IntoResponse for InvalidDecisionErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, error_payload(&self.message)).into_response()
    }
}
