pub mod authorize;
pub mod dto;
pub mod error;

pub use authorize::AuthorizeUrlBuilder;
pub use dto::{AuthorizeParams, TokenRequest, TokenResponse, AUTHORIZATION_CODE_GRANT};
pub use error::TokenExchangeError;
