use axum::{http::StatusCode, response::IntoResponse, Json};
use ipgeo_rs::{LookupError, LookupErrorKind};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Lookup(#[from] LookupError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Lookup(e) => match e.kind() {
                LookupErrorKind::UpstreamRejection => StatusCode::UNPROCESSABLE_ENTITY,
                LookupErrorKind::Transport | LookupErrorKind::MalformedResponse => {
                    StatusCode::BAD_GATEWAY
                }
            },
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
