//! API error type rendering the fixed failure object

use crate::contract::ApiFailure;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::error;

/// Handler error carrying a status code and the failure body.
///
/// Every error response, whatever the status, serializes to the same
/// `{ "success": false, "error": ... }` shape.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    failure: ApiFailure,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, failure: ApiFailure) -> Self {
        Self { status, failure }
    }

    /// The fixed 401 protected routes answer with
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiFailure::unauthorized())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiFailure::new(message))
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiFailure::not_found())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(error = %message, "internal server error");
        // Do not leak implementation details to clients.
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiFailure::new("Internal server error"),
        )
    }

    pub fn failure(&self) -> &ApiFailure {
        &self.failure
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.failure.error)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(&self.failure)
    }
}
