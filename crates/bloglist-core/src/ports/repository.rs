//! Storage ports for blogs and users.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, User};
use crate::error::RepoError;

/// CRUD shared by every store.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// `Ok(None)` when no record has `id`.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite the record with the same id. `RepoError::NotFound` if there is none.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// `RepoError::NotFound` if nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Usernames are unique, so at most one match.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// Blogs created by `owner_id`, oldest first.
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Blog>, RepoError>;
}
