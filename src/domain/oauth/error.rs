use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TokenExchangeError {
    #[error("timed out after {0} ms")]
    Timeout(u64),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("rejected with status {status}")]
    Rejected { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<TokenExchangeError> for AppError {
    fn from(err: TokenExchangeError) -> Self {
        match err {
            TokenExchangeError::Timeout(_) | TokenExchangeError::Transport(_) => {
                AppError::UpstreamTransport(err.to_string())
            }
            TokenExchangeError::Rejected { status, body } => {
                AppError::UpstreamRejected { status, body }
            }
            TokenExchangeError::Decode(msg) => AppError::UpstreamDecode(msg),
        }
    }
}
