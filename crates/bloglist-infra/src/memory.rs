//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Records keep insertion order, so listings come back in creation order.
//! Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloglist_core::domain::{Blog, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, BlogRepository, UserRepository};

/// Something stored in memory under a UUID key.
trait Keyed: Clone {
    fn key(&self) -> Uuid;
}

impl Keyed for Blog {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for User {
    fn key(&self) -> Uuid {
        self.id
    }
}

/// A vector behind an async RwLock, shared by both repositories.
struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T: Keyed> Table<T> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    async fn get(&self, id: Uuid) -> Option<T> {
        self.rows.read().await.iter().find(|r| r.key() == id).cloned()
    }

    async fn replace(&self, row: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|r| r.key() == row.key())
            .ok_or(RepoError::NotFound)?;
        *slot = row.clone();
        Ok(row)
    }

    async fn remove(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.key() != id);

        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

/// In-memory user store. Enforces unique usernames on insert.
pub struct InMemoryUserRepository {
    table: Table<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.table.all().await)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, user: User) -> Result<User, RepoError> {
        // Check and insert under one write lock so two registrations can't race.
        let mut rows = self.table.rows.write().await;
        if rows.iter().any(|u| u.username == user.username) {
            return Err(RepoError::Constraint(format!(
                "username `{}` already exists",
                user.username
            )));
        }
        if rows.iter().any(|u| u.id == user.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        self.table.replace(user).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.table.remove(id).await
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(username, "Finding user by username");
        Ok(self
            .table
            .rows
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

/// In-memory blog store.
pub struct InMemoryBlogRepository {
    table: Table<Blog>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        Ok(self.table.all().await)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut rows = self.table.rows.write().await;
        if rows.iter().any(|b| b.id == blog.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        rows.push(blog.clone());
        Ok(blog)
    }

    async fn update(&self, blog: Blog) -> Result<Blog, RepoError> {
        self.table.replace(blog).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.table.remove(id).await
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Blog>, RepoError> {
        Ok(self
            .table
            .rows
            .read()
            .await
            .iter()
            .filter(|b| b.is_owned_by(owner_id))
            .cloned()
            .collect())
    }
}
