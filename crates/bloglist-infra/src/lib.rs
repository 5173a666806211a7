//! # Bloglist Infrastructure
//!
//! Concrete implementations of the ports defined in `bloglist-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory store only
//! - `postgres` - PostgreSQL store via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod database;
pub mod memory;

#[cfg(feature = "auth")]
pub mod auth;

pub use memory::{InMemoryBlogRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
pub use database::Database;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
