use std::sync::Arc;

use axum::{
    debug_handler,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{error, warn};

use crate::{
    application::{
        workspace::{self, WorkspaceUseCase},
        Application,
    },
    server::response::error_payload,
};

use self::response::{
    GetWorkspaceNamesResponse, ValidateWorkspaceNameResponse, WorkspaceNameAlreadyExistsErrorResponse,
    WorkspaceNameRequiredErrorResponse,
};

mod response;

pub(crate) fn router(application: Arc<Application>) -> axum::Router {
    Router::new()
        .route("/ws-validate", get(handle_missing_workspace_name))
        .route("/ws-validate/", get(handle_missing_workspace_name))
        .route("/ws-validate/:name", get(handle_validate_workspace_name))
        .route("/workspaces", get(handle_get_workspace_names))
        .with_state(application)
}

async fn handle_missing_workspace_name() -> impl IntoResponse {
    WorkspaceNameRequiredErrorResponse
}

#[debug_handler]
async fn handle_validate_workspace_name(
    State(application): State<Arc<Application>>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Response, workspace::Error> {
    let Path(name) = match name {
        Ok(name) => name,
        Err(rejection) => {
            warn!(error = %rejection, "rejected workspace name path.");
            return Ok((rejection.status(), error_payload(&rejection.body_text())).into_response());
        }
    };
    let name = name.trim();
    if name.is_empty() {
        return Ok(WorkspaceNameRequiredErrorResponse.into_response());
    }

    let available = application.workspace().is_name_available(name).await.map_err(|e| {
        error!(error = %e, "failed to validate workspace name \"{name}\".");
        e
    })?;

    if !available {
        return Ok(WorkspaceNameAlreadyExistsErrorResponse.into_response());
    }

    Ok((StatusCode::OK, Json(ValidateWorkspaceNameResponse { available })).into_response())
}

#[debug_handler]
async fn handle_get_workspace_names(
    State(application): State<Arc<Application>>,
) -> Result<impl IntoResponse, workspace::Error> {
    let names = application.workspace().get_all_names().await.map_err(|e| {
        error!(error = %e, "failed to list workspace names.");
        e
    })?;

    Ok((StatusCode::OK, Json(GetWorkspaceNamesResponse { names })))
}

impl IntoResponse for workspace::Error {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::INTERNAL_SERVER_ERROR, error_payload(&self.to_string())).into_response()
    }
}
