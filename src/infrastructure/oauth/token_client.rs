use super::provider::OAuthProvider;
use crate::domain::oauth::{TokenExchangeError, TokenRequest, TokenResponse};
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

/// Largest token endpoint body read into memory
const MAX_BODY_BYTES: usize = 64 * 1024;
/// Portion of an error body kept for logs and error responses
const MAX_ERROR_BODY_BYTES: usize = 512;

/// Token endpoint client for the authorization-code grant
pub struct HttpTokenClient {
    token_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl HttpTokenClient {
    pub fn new(
        token_url: String,
        client_id: String,
        client_secret: String,
        redirect_uri: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build token endpoint HTTP client")?;

        Ok(Self {
            token_url,
            client_id,
            client_secret,
            redirect_uri,
            timeout,
            http_client,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> TokenExchangeError {
        if err.is_timeout() {
            TokenExchangeError::Timeout(self.timeout.as_millis() as u64)
        } else {
            TokenExchangeError::Transport(err.to_string())
        }
    }

    /// Read at most `limit` bytes of the body; the flag is set when more was available
    async fn read_body(
        &self,
        mut response: reqwest::Response,
        limit: usize,
    ) -> Result<(Vec<u8>, bool), TokenExchangeError> {
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| self.transport_error(e))? {
            let room = limit - body.len();
            if chunk.len() > room {
                body.extend_from_slice(&chunk[..room]);
                return Ok((body, true));
            }
            body.extend_from_slice(&chunk);
        }
        Ok((body, false))
    }
}

#[async_trait]
impl OAuthProvider for HttpTokenClient {
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, TokenExchangeError> {
        let request = TokenRequest::authorization_code(
            &self.client_id,
            &self.client_secret,
            &self.redirect_uri,
            code,
        );

        tracing::debug!(token_url = %self.token_url, "Exchanging authorization code");

        let response = self
            .http_client
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();

        if !status.is_success() {
            let (body, _) = self.read_body(response, MAX_ERROR_BODY_BYTES).await?;
            return Err(TokenExchangeError::Rejected {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let (body, truncated) = self.read_body(response, MAX_BODY_BYTES).await?;
        if truncated {
            return Err(TokenExchangeError::Decode(format!(
                "response body exceeds {} bytes",
                MAX_BODY_BYTES
            )));
        }

        let token = serde_json::from_slice::<TokenResponse>(&body)
            .map_err(|e| TokenExchangeError::Decode(e.to_string()))?;

        tracing::info!(
            token_type = ?token.token_type,
            expires_in = ?token.expires_in,
            has_refresh_token = token.refresh_token.is_some(),
            "Authorization code exchanged"
        );

        Ok(token)
    }
}
