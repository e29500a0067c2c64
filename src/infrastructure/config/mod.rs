use serde::Deserialize;
use std::env;

const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_PROVIDER_DOMAIN: &str = "api.captation.beta.rca.fr";
const DEFAULT_AUTHORIZE_PATH: &str = "/entreprise-partenaire/authorize";
/// Upper bound for JWT_EXPIRATION_HOURS (one year)
const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// Externally visible base URL, used to build redirect and abort URIs
    pub public_base_url: String,
    // Provider
    pub provider_domain: String,
    pub provider_authorize_path: String,
    pub oauth_token_url: String,
    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_uri: String,
    pub upstream_timeout_ms: u64,
    // Local session tokens
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            provider_domain: env::var("PROVIDER_DOMAIN")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_DOMAIN.to_string()),
            provider_authorize_path: env::var("PROVIDER_AUTHORIZE_PATH")
                .unwrap_or_else(|_| DEFAULT_AUTHORIZE_PATH.to_string()),
            oauth_token_url: env::var("OAUTH_TOKEN_URL")?,
            oauth_client_id: env::var("OAUTH_CLIENT_ID")?,
            oauth_client_secret: env::var("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_uri: env::var("OAUTH_REDIRECT_URI")
                .unwrap_or_else(|_| format!("{}/oauth/redirect", public_base_url)),
            upstream_timeout_ms: env::var("UPSTREAM_TIMEOUT_MS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()?,
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_expiration_hours: parse_expiration_hours(
                &env::var("JWT_EXPIRATION_HOURS").unwrap_or_else(|_| "5".to_string()),
            )?,
            public_base_url,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Callback URI the provider sends the user back to
    pub fn callback_uri(&self) -> String {
        format!("{}/oauth/redirect", self.public_base_url)
    }

    /// URI the provider sends the user to when consent is aborted
    pub fn abort_uri(&self) -> String {
        format!("{}/index", self.public_base_url)
    }
}

/// Parse a session token lifetime, accepting 1 hour up to one year
fn parse_expiration_hours(raw: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let hours: i64 = raw.trim().parse()?;
    if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&hours) {
        return Err(format!(
            "JWT_EXPIRATION_HOURS must be between 1 and {}, got {}",
            MAX_JWT_EXPIRATION_HOURS, hours
        )
        .into());
    }
    Ok(hours)
}
