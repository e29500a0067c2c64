use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Missing authorization code in callback")]
    MissingCode,

    #[error("Authorization denied by provider: {0}")]
    ProviderDenied(String),

    #[error("Failed to sign session token: {0}")]
    Signing(String),

    #[error("Token endpoint unreachable: {0}")]
    UpstreamTransport(String),

    #[error("Token endpoint returned {status}: {body}")]
    UpstreamRejected { status: u16, body: String },

    #[error("Invalid token endpoint response: {0}")]
    UpstreamDecode(String),
}

/// Error response structure - simplified to just message + status code
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::MissingCode | Self::ProviderDenied(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UpstreamTransport(_) | Self::UpstreamRejected { .. } | Self::UpstreamDecode(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to simplified error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        (status, Json(self.to_response())).into_response()
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
