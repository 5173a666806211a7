//! Shared CRUD over any SeaORM entity whose model maps to a domain type.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityName, EntityTrait, IntoActiveModel,
    Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, SqlErr,
};

use bloglist_core::error::RepoError;
use bloglist_core::ports::BaseRepository;

/// Entities listed oldest first, so every read sees rows in insertion order.
pub trait Chronological: EntityTrait {
    fn created_at() -> Self::Column;
}

pub struct PostgresBaseRepository<E: EntityTrait> {
    pub(crate) db: DbConn,
    entity: PhantomData<E>,
}

impl<E: EntityTrait> PostgresBaseRepository<E> {
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }
}

pub(crate) fn query_err(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        e => RepoError::Query(e.to_string()),
    }
}

/// Like [`query_err`], but also recognises missing rows and unique violations.
fn write_err(e: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        return RepoError::Constraint(detail);
    }
    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepoError::NotFound,
        e => query_err(e),
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: Chronological,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Into<sea_orm::Value> + Copy + Send + Sync + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        // Primary key breaks ties between rows created in the same instant.
        let mut query = E::find().order_by_asc(E::created_at());
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        let rows = query.all(&self.db).await.map_err(query_err)?;
        tracing::debug!(table = E::default().table_name(), rows = rows.len(), "Loaded all rows");
        Ok(rows.into_iter().map(T::from).collect())
    }

    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let row = E::find_by_id(id).one(&self.db).await.map_err(query_err)?;
        Ok(row.map(T::from))
    }

    async fn create(&self, entity: T) -> Result<T, RepoError> {
        let model: E::ActiveModel = entity.into();
        let row = model.insert(&self.db).await.map_err(write_err)?;
        Ok(T::from(row))
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let model: E::ActiveModel = entity.into();
        let row = model.update(&self.db).await.map_err(write_err)?;
        Ok(T::from(row))
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let outcome = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        match outcome.rows_affected {
            0 => Err(RepoError::NotFound),
            _ => Ok(()),
        }
    }
}
