use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Extension,
};
use serde::Deserialize;
use std::sync::Arc;

use super::extract::{AppForm, AppQuery};
use crate::{
    domain::oauth::{AuthorizeParams, AuthorizeUrlBuilder},
    error::{AppError, AppResult},
    infrastructure::{http::RequestId, oauth::OAuthProvider},
};

#[derive(Debug, Default, Deserialize)]
pub struct OAuthCallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

pub struct OAuthController {
    provider: Arc<dyn OAuthProvider>,
    authorize_urls: AuthorizeUrlBuilder,
}

impl OAuthController {
    pub fn new(provider: Arc<dyn OAuthProvider>, authorize_urls: AuthorizeUrlBuilder) -> Self {
        Self {
            provider,
            authorize_urls,
        }
    }

    /// GET /oauth - Redirect the user to the provider authorize endpoint
    ///
    /// Form params: domain, clientId, scopes, currentCompany
    pub async fn authorize(
        State(controller): State<Arc<OAuthController>>,
        AppForm(params): AppForm<AuthorizeParams>,
    ) -> impl IntoResponse {
        let auth_url = controller.authorize_urls.build(&params);

        tracing::info!(
            domain = %params.domain,
            scopes = %params.scopes,
            "Redirecting to provider authorize endpoint"
        );

        (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, auth_url)])
    }

    /// GET /oauth/redirect - Exchange the callback code for an access token
    ///
    /// Returns the access token as a plain-text body
    pub async fn callback(
        State(controller): State<Arc<OAuthController>>,
        Extension(request_id): Extension<RequestId>,
        AppQuery(params): AppQuery<OAuthCallbackParams>,
    ) -> AppResult<impl IntoResponse> {
        if let Some(error) = params.error {
            let reason = match params.error_description {
                Some(description) => format!("{}: {}", error, description),
                None => error,
            };
            return Err(AppError::ProviderDenied(reason));
        }

        let code = params
            .code
            .filter(|code| !code.trim().is_empty())
            .ok_or(AppError::MissingCode)?;

        tracing::info!(request_id = %request_id.0, "Handling OAuth callback");

        let token = controller.provider.exchange_code(code.trim()).await?;

        Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            token.access_token,
        ))
    }
}
