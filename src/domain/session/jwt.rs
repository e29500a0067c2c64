use super::error::SessionError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Roles granted to every locally issued session token
pub const LOCAL_ROLES: [&str; 4] = [
    "RCA_CLOUD_EXPERT_COMPTABLE",
    "E_COLLECTE_BO_CREA",
    "E_CREATION_CREA",
    "E_QUESTIONNAIRE_CREA",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    #[serde(rename = "idEntreprise")]
    pub id_entreprise: String,
    #[serde(rename = "rcaPartnerId")]
    pub rca_partner_id: String,
    pub roles: Vec<String>,
    pub exp: i64, // Expiration time
    pub iat: i64, // Issued at
}

/// Identity a local session token is issued for
#[derive(Debug, Clone)]
pub struct SessionSubject {
    pub sub: String,
    pub id_entreprise: String,
    pub rca_partner_id: String,
}

/// Issues self-contained HS256 session tokens signed with a server-held key.
/// Nothing is recorded server-side once a token is signed.
pub struct SessionTokenIssuer {
    secret: String,
    expiration_hours: i64,
}

impl SessionTokenIssuer {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret,
            expiration_hours,
        }
    }

    pub fn expiration_hours(&self) -> i64 {
        self.expiration_hours
    }

    /// Build the claims for a subject and sign them
    pub fn issue(&self, subject: SessionSubject) -> Result<String, SessionError> {
        if self.secret.is_empty() {
            return Err(SessionError::Signing("signing secret is empty".to_string()));
        }

        if self.expiration_hours <= 0 {
            return Err(SessionError::Signing(format!(
                "token lifetime must be positive, got {} hours",
                self.expiration_hours
            )));
        }

        let now = Utc::now();
        let exp = Duration::try_hours(self.expiration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                SessionError::Signing(format!(
                    "token lifetime of {} hours is out of range",
                    self.expiration_hours
                ))
            })?;

        let claims = SessionClaims {
            sub: subject.sub,
            id_entreprise: subject.id_entreprise,
            rca_partner_id: subject.rca_partner_id,
            roles: LOCAL_ROLES.iter().map(|role| role.to_string()).collect(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| SessionError::Signing(e.to_string()))
    }

    /// Verify a token's signature and expiry and extract its claims
    pub fn decode(&self, token: &str) -> Result<SessionClaims, SessionError> {
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| SessionError::Invalid(e.to_string()))
    }
}
