//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use bloglist_core::domain::{Blog, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BlogRepository, UserRepository};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{Chronological, PostgresBaseRepository, query_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

impl Chronological for UserEntity {
    fn created_at() -> user::Column {
        user::Column::CreatedAt
    }
}

impl Chronological for BlogEntity {
    fn created_at() -> blog::Column {
        blog::Column::CreatedAt
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(username, "Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Blog>, RepoError> {
        let result = BlogEntity::find()
            .filter(blog::Column::UserId.eq(owner_id))
            .order_by_asc(blog::Column::CreatedAt)
            .order_by_asc(blog::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
