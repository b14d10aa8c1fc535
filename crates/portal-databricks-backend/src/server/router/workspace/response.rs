use axum::{http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::server::response::error_payload;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ValidateWorkspaceNameResponse {
    pub available: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GetWorkspaceNamesResponse {
    pub names: Vec<String>,
}

pub(super) struct WorkspaceNameRequiredErrorResponse;

impl IntoResponse for WorkspaceNameRequiredErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, error_payload("name is required")).into_response()
    }
}

pub(super) struct WorkspaceNameAlreadyExistsErrorResponse;

impl IntoResponse for WorkspaceNameAlreadyExistsErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, error_payload("Workspace name already exists")).into_response()
    }
}
