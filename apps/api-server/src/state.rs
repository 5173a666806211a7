//! Application state - shared across all handlers.

use std::sync::Arc;

use bloglist_core::ports::{BlogRepository, PasswordService, TokenService, UserRepository};
use bloglist_infra::{
    Argon2PasswordService, InMemoryBlogRepository, InMemoryUserRepository, JwtConfig,
    JwtTokenService,
};

#[cfg(feature = "postgres")]
use bloglist_infra::Database;
#[cfg(feature = "postgres")]
use bloglist_infra::database::{PostgresBlogRepository, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub users: Arc<dyn UserRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    /// Which store backs the repositories, reported by the health check.
    pub store: &'static str,
}

impl AppState {
    /// State backed by the in-memory repositories.
    pub fn in_memory(jwt: JwtConfig) -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            tokens: Arc::new(JwtTokenService::new(jwt)),
            passwords: Arc::new(Argon2PasswordService::new()),
            store: "memory",
        }
    }

    /// State backed by PostgreSQL. The caller keeps ownership of `db`.
    #[cfg(feature = "postgres")]
    pub fn with_database(db: &Database, jwt: JwtConfig) -> Self {
        Self {
            blogs: Arc::new(PostgresBlogRepository::new(db.conn().clone())),
            users: Arc::new(PostgresUserRepository::new(db.conn().clone())),
            tokens: Arc::new(JwtTokenService::new(jwt)),
            passwords: Arc::new(Argon2PasswordService::new()),
            store: "postgres",
        }
    }
}
