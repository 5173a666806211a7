//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a blog. Field presence is checked by the domain layer
/// so that a missing title or url maps to a validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// Full or partial replacement of a blog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// The owning user as embedded in a blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: Uuid,
    pub username: String,
    pub name: String,
}

/// A blog with its owner resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: Option<OwnerSummary>,
}

/// A blog as embedded in its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSummary {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

/// Request to register a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub blogs: Vec<BlogSummary>,
}

/// Request to login. Missing fields count as wrong credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Response containing the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
    /// Seconds until `token` expires.
    pub expires_in: i64,
}
