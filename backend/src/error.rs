use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clearway_common::ContactError;
use serde_json::json;
use thiserror::Error;

/// Errors returned by the JSON handlers, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Upstream(String), // an external service failed
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

impl From<ContactError> for ApiError {
    fn from(e: ContactError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
