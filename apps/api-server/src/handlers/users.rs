//! User registration and listing.

use actix_web::{HttpResponse, web};

use bloglist_core::DomainError;
use bloglist_core::domain::{Blog, User, validate_registration};
use bloglist_core::error::RepoError;
use bloglist_core::ports::BaseRepository;
use bloglist_shared::dto::{BlogSummary, RegisterUserRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;

    let mut body = Vec::with_capacity(users.len());
    for user in users {
        let blogs = state.blogs.find_by_owner(user.id).await?;
        body.push(to_response(user, blogs));
    }

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/users
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate_registration(req.username.as_deref(), req.password.as_deref())?;

    // Both are present once validation passed.
    let (Some(username), Some(password)) = (req.username, req.password) else {
        return Err(AppError::BadRequest("missing credentials".to_string()));
    };

    if state.users.find_by_username(&username).await?.is_some() {
        return Err(duplicate_username());
    }

    let password_hash = state.passwords.hash(&password)?;
    let user = User::new(username, req.name.unwrap_or_default(), password_hash);

    // A concurrent registration can still win between the check and the insert.
    let saved = match state.users.create(user).await {
        Ok(saved) => saved,
        Err(RepoError::Constraint(_)) => return Err(duplicate_username()),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = %saved.id, username = %saved.username, "User registered");

    Ok(HttpResponse::Created().json(to_response(saved, Vec::new())))
}

fn duplicate_username() -> AppError {
    DomainError::Duplicate("expected `username` to be unique".to_string()).into()
}

fn to_response(user: User, blogs: Vec<Blog>) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        name: user.name,
        blogs: blogs
            .into_iter()
            .map(|b| BlogSummary {
                id: b.id,
                title: b.title,
                author: b.author,
                url: b.url,
                likes: b.likes,
            })
            .collect(),
    }
}
