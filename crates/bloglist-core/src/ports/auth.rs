//! Credential ports: bearer tokens and password hashes.

use uuid::Uuid;

/// What a verified bearer token says about its holder.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub username: String,
}

pub trait TokenService: Send + Sync {
    /// Sign a token identifying `username`.
    fn issue(&self, user_id: Uuid, username: &str) -> Result<String, AuthError>;

    /// Check signature, issuer and expiry, then return the claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;

    fn lifetime_seconds(&self) -> i64;
}

/// One-way password storage. Plaintext never leaves the request handler.
pub trait PasswordService: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// `Ok(false)` on mismatch, `Err` only when `hash` is unreadable.
    fn matches(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("token expired")]
    TokenExpired,

    #[error("token invalid: {0}")]
    InvalidToken(String),

    #[error("token missing")]
    MissingToken,

    #[error("password hash error: {0}")]
    Hash(String),
}
