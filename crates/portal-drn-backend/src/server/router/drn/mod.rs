use std::sync::Arc;

use axum::{
    debug_handler,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, warn};

use crate::{
    application::{
        drn::{self, DrnUseCase},
        Application,
    },
    server::response::error_payload,
};

use self::{
    request::{PendingDrnsQuery, PostDecisionRequest},
    response::{InvalidDecisionErrorResponse, PendingDrnsResponse, PostDecisionResponse},
};

mod request;
mod response;

pub(crate) fn router(application: Arc<Application>) -> axum::Router {
    Router::new()
        .route("/pending", get(handle_get_pending_drns))
        .route("/decision", post(handle_post_decision))
        .with_state(application)
}

#[debug_handler]
async fn handle_get_pending_drns(
    State(application): State<Arc<Application>>,
    query: Result<Query<PendingDrnsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, drn::Error> {
    // An unreadable query string only means approved records were not asked for.
    let include_approved = match query {
        Ok(Query(query)) => query.include_approved(),
        Err(rejection) => {
            warn!(error = %rejection, "ignoring unreadable pending drns query.");
            false
        }
    };

    let documents = application.drn().list_pending(include_approved).await.map_err(|e| {
        error!(error = %e, "failed to list pending drns.");
        e
    })?;

    Ok((StatusCode::OK, Json(PendingDrnsResponse { documents })))
}

#[debug_handler]
async fn handle_post_decision(
    State(application): State<Arc<Application>>,
    payload: Result<Json<PostDecisionRequest>, JsonRejection>,
) -> Result<Response, drn::Error> {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "rejected drn decision body.");
            return Ok(InvalidDecisionErrorResponse { message: rejection.body_text() }.into_response());
        }
    };

    application.drn().decide(&payload.drn, payload.decision).await?;

    Ok((StatusCode::OK, Json(PostDecisionResponse { ok: true })).into_response())
}

impl IntoResponse for drn::Error {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::INTERNAL_SERVER_ERROR, error_payload(&self.to_string())).into_response()
    }
}
