use super::dto::AuthorizeParams;
use urlencoding::encode;

/// Builds provider authorize URLs with a fixed callback/abort URI pair.
///
/// Empty `domain` and `clientId` form values fall back to the configured
/// provider defaults; nothing else is validated.
#[derive(Debug, Clone)]
pub struct AuthorizeUrlBuilder {
    default_domain: String,
    default_client_id: String,
    authorize_path: String,
    redirect_uri: String,
    abort_uri: String,
}

impl AuthorizeUrlBuilder {
    pub fn new(
        default_domain: String,
        default_client_id: String,
        authorize_path: String,
        redirect_uri: String,
        abort_uri: String,
    ) -> Self {
        Self {
            default_domain,
            default_client_id,
            authorize_path,
            redirect_uri,
            abort_uri,
        }
    }

    pub fn build(&self, params: &AuthorizeParams) -> String {
        let domain = non_empty_or(&params.domain, &self.default_domain);
        let client_id = non_empty_or(&params.client_id, &self.default_client_id);

        // Any submitted value means the checkbox was ticked
        let current_company = if params.current_company.is_empty() {
            "false"
        } else {
            "true"
        };

        format!(
            "https://{}{}?client_id={}&scope={}&current_company={}&redirect_uri={}&abort_uri={}",
            domain.trim_end_matches('/'),
            self.authorize_path,
            encode(client_id),
            encode(&params.scopes),
            current_company,
            encode(&self.redirect_uri),
            encode(&self.abort_uri),
        )
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
