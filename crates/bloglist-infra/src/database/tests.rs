use bloglist_core::domain::{Blog, User};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{BaseRepository, BlogRepository, UserRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use crate::database::entity::{blog, user};
use crate::database::postgres_repo::{PostgresBlogRepository, PostgresUserRepository};

fn blog_model(title: &str, likes: i64, user_id: Option<Uuid>) -> blog::Model {
    blog::Model {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        author: "Michael Chan".to_owned(),
        url: "https://reactpatterns.com/".to_owned(),
        likes,
        user_id,
        created_at: chrono::Utc::now().into(),
    }
}

fn user_model(username: &str) -> user::Model {
    user::Model {
        id: Uuid::new_v4(),
        username: username.to_owned(),
        name: "Matti Luukkainen".to_owned(),
        password_hash: "$argon2id$hash".to_owned(),
        created_at: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_blog_by_id() {
    let model = blog_model("React patterns", 7, None);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let found: Option<Blog> = repo.find_by_id(model.id).await.unwrap();

    let found = found.unwrap();
    assert_eq!(found.id, model.id);
    assert_eq!(found.title, "React patterns");
    assert_eq!(found.likes, 7);
    assert_eq!(found.owner_id, None);
}

#[tokio::test]
async fn test_find_all_blogs() {
    let owner = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            blog_model("one", 4, Some(owner)),
            blog_model("two", 8, None),
        ]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let blogs: Vec<Blog> = repo.find_all().await.unwrap();

    assert_eq!(blogs.len(), 2);
    assert_eq!(blogs[0].owner_id, Some(owner));
    assert_eq!(blogs[1].likes, 8);
}

#[tokio::test]
async fn test_find_all_blogs_is_ordered_oldest_first() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![blog_model("one", 4, None)]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let _: Vec<Blog> = repo.find_all().await.unwrap();

    let log = repo.db.into_transaction_log();
    let sql = &log[0].statements()[0].sql;
    assert!(
        sql.contains(r#"ORDER BY "blogs"."created_at" ASC, "blogs"."id" ASC"#),
        "{sql}"
    );
}

#[tokio::test]
async fn test_create_blog_returns_inserted_row() {
    let owner = Uuid::new_v4();
    let model = blog_model("Type wars", 0, Some(owner));
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let blog: Blog = model.clone().into();
    let saved = repo.create(blog).await.unwrap();

    assert_eq!(saved.id, model.id);
    assert_eq!(saved.owner_id, Some(owner));
}

#[tokio::test]
async fn test_delete_missing_blog_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let result = BaseRepository::<Blog, Uuid>::delete(&repo, Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_existing_blog() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let result = BaseRepository::<Blog, Uuid>::delete(&repo, Uuid::new_v4()).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_find_blogs_by_owner() {
    let owner = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![blog_model("mine", 3, Some(owner))]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let blogs = repo.find_by_owner(owner).await.unwrap();

    assert_eq!(blogs.len(), 1);
    assert!(blogs[0].is_owned_by(owner));
}

#[tokio::test]
async fn test_find_user_by_username() {
    let model = user_model("mluukkai");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);
    let found: Option<User> = repo.find_by_username("mluukkai").await.unwrap();

    let found = found.unwrap();
    assert_eq!(found.id, model.id);
    assert_eq!(found.password_hash, "$argon2id$hash");
}
