use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::upstream::UpstreamError;

/// Error body, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        error!("Upstream failure: {}", err);
        match err {
            UpstreamError::Status(status) => ApiError { status, detail: "Subfeddit not found" },
            UpstreamError::Unavailable(_) => ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: "Error connecting to Feddit API",
            },
            UpstreamError::InvalidPayload(_) => ApiError {
                status: StatusCode::BAD_GATEWAY,
                detail: "Invalid response from Feddit API",
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { detail: self.detail.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
