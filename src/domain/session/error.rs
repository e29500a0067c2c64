use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("signing failed: {0}")]
    Signing(String),
    #[error("invalid token: {0}")]
    Invalid(String),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Signing(msg) => AppError::Signing(msg),
            SessionError::Invalid(msg) => AppError::BadRequest(msg),
        }
    }
}
