use crate::domain::oauth::{TokenExchangeError, TokenResponse};
use async_trait::async_trait;

/// Server-to-server half of the authorization-code flow.
///
/// Implementations own the client credentials; callers only hand over the
/// code received on the callback.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Exchange an authorization code for an access token
    ///
    /// # Errors
    /// Returns error if the token endpoint is unreachable, times out,
    /// rejects the request or answers with something other than a token
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, TokenExchangeError>;
}
