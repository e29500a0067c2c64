use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

use super::extract::AppForm;
use crate::{
    domain::session::{SessionSubject, SessionTokenIssuer},
    error::AppResult,
};

/// Form fields accepted by /local (query string on GET, urlencoded body on POST)
#[derive(Debug, Default, Deserialize)]
pub struct LocalTokenParams {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub id_entreprise: String,
    #[serde(default, rename = "rcaPartnerId")]
    pub rca_partner_id: String,
    /// No longer honoured, the signing key is server-held
    #[serde(default)]
    pub secret: Option<String>,
}

pub struct LocalTokenController {
    issuer: Arc<SessionTokenIssuer>,
}

impl LocalTokenController {
    pub fn new(issuer: Arc<SessionTokenIssuer>) -> Self {
        Self { issuer }
    }

    /// GET|POST /local - Issue a signed local session token
    ///
    /// Returns the token as a plain-text attachment
    pub async fn issue(
        State(controller): State<Arc<LocalTokenController>>,
        AppForm(params): AppForm<LocalTokenParams>,
    ) -> AppResult<impl IntoResponse> {
        if params.secret.is_some() {
            tracing::warn!("Ignoring caller-supplied signing secret on /local");
        }

        let sub = params.sub;

        let token = controller.issuer.issue(SessionSubject {
            sub: sub.clone(),
            id_entreprise: params.id_entreprise,
            rca_partner_id: params.rca_partner_id,
        })?;

        tracing::info!(
            sub = %sub,
            expires_in_hours = controller.issuer.expiration_hours(),
            "Local session token issued"
        );

        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"token.jwt\""),
            ],
            token,
        ))
    }
}
