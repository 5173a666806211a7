//! HS256 bearer tokens.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bloglist_core::ports::{AuthError, TokenClaims, TokenService};

const DEV_SECRET: &str = "bloglist-dev-secret";
const DEFAULT_EXPIRATION_HOURS: i64 = 1;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEV_SECRET.to_string(),
            expiration_hours: DEFAULT_EXPIRATION_HOURS,
            issuer: "bloglist-api".to_string(),
        }
    }
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_EXPIRATION_HOURS` and `JWT_ISSUER`, keeping
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.secret = secret;
        }
        if let Some(hours) = std::env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.expiration_hours = hours;
        }
        if TimeDelta::try_hours(config.expiration_hours).is_none() {
            tracing::warn!(
                hours = config.expiration_hours,
                "JWT_EXPIRATION_HOURS out of range, using the default"
            );
            config.expiration_hours = DEFAULT_EXPIRATION_HOURS;
        }
        if let Ok(issuer) = std::env::var("JWT_ISSUER") {
            config.issuer = issuer;
        }

        if config.secret == DEV_SECRET {
            let production = matches!(
                std::env::var("RUST_ENV").as_deref(),
                Ok("production" | "prod")
            );
            if production {
                tracing::error!("JWT_SECRET is unset in production, tokens are forgeable");
            } else {
                tracing::warn!("JWT_SECRET is unset, signing with the development secret");
            }
        }

        config
    }
}

/// Registered claims plus the username.
#[derive(Debug, Serialize, Deserialize)]
struct Payload {
    sub: Uuid,
    username: String,
    iat: i64,
    exp: i64,
    iss: String,
}

pub struct JwtTokenService {
    keys: (EncodingKey, DecodingKey),
    validation: Validation,
    lifetime: TimeDelta,
    issuer: String,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let secret = config.secret.as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);

        let lifetime = TimeDelta::try_hours(config.expiration_hours).unwrap_or_else(|| {
            tracing::warn!(
                hours = config.expiration_hours,
                "Token lifetime out of range, using the default"
            );
            TimeDelta::hours(DEFAULT_EXPIRATION_HOURS)
        });

        Self {
            keys: (
                EncodingKey::from_secret(secret),
                DecodingKey::from_secret(secret),
            ),
            validation,
            lifetime,
            issuer: config.issuer,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: Uuid, username: &str) -> Result<String, AuthError> {
        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| AuthError::InvalidToken("expiry out of range".to_string()))?;
        let payload = Payload {
            sub: user_id,
            username: username.to_owned(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.issuer.clone(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &payload, &self.keys.0)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let data = jsonwebtoken::decode::<Payload>(token, &self.keys.1, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })?;

        Ok(TokenClaims {
            user_id: data.claims.sub,
            username: data.claims.username,
        })
    }

    fn lifetime_seconds(&self) -> i64 {
        self.lifetime.num_seconds()
    }
}
