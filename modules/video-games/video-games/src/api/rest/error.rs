use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::error::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP boundary for domain failures. Every body is plain text.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::TitleExists { .. } => StatusCode::CONFLICT,
            DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
            DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if let DomainError::Database(_) = &self.0 {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?self.0, "Database error occurred");
            "An internal error occurred".to_owned()
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.0, "Request rejected");
            self.0.to_string()
        };

        (status, body).into_response()
    }
}
