use axum::Json;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub(crate) struct ErrorPayload<'a> {
    error: &'a str,
}

pub(crate) fn error_payload(message: &str) -> Json<ErrorPayload<'_>> {
    Json(ErrorPayload { error: message })
}
