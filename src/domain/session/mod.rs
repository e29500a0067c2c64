pub mod error;
pub mod jwt;

pub use error::SessionError;
pub use jwt::{SessionClaims, SessionSubject, SessionTokenIssuer, LOCAL_ROLES};
