//! Bearer tokens for Learning Log accounts.
//!
//! A token is an HS256 JWT carrying [`Claims`]; it is the whole session, so
//! nothing is stored server-side. Tokens are stamped with [`ISSUER`] and
//! rejected if minted by anything else sharing the secret.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use learning_log_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `iss` claim written into and required on every token.
pub const ISSUER: &str = "learning-log";

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;

/// Payload of an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Account id.
    pub sub: DbId,
    pub username: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    /// Random token id, logged on authentication failures.
    pub jti: String,
}

/// Signing secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default 60, must be positive).
    ///
    /// # Panics
    ///
    /// On a missing secret or an unparseable lifetime.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set and non-empty");

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|mins| *mins > 0)
                .unwrap_or_else(|| panic!("JWT_ACCESS_EXPIRY_MINS must be a positive integer, got '{raw}'")),
            Err(_) => DEFAULT_ACCESS_EXPIRY_MINS,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Token lifetime in seconds.
    pub fn expires_in_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::default();
        validation.set_issuer(&[ISSUER]);
        validation
    }
}

/// Mint an access token for an account.
pub fn generate_access_token(
    user_id: DbId,
    username: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        username: username.to_owned(),
        iss: ISSUER.to_owned(),
        iat,
        exp: iat + config.expires_in_secs(),
        jti: Uuid::new_v4().to_string(),
    };
    let key = EncodingKey::from_secret(config.secret.as_bytes());
    encode(&Header::default(), &claims, &key)
}

/// Check signature, expiry and issuer, and return the claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());
    decode::<Claims>(token, &key, &config.validation()).map(|data| data.claims)
}
