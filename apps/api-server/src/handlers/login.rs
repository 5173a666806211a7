//! Login handler.

use actix_web::{HttpResponse, web};

use bloglist_core::ports::AuthError;
use bloglist_shared::dto::{LoginRequest, LoginResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let LoginRequest {
        username: Some(username),
        password: Some(password),
    } = body.into_inner()
    else {
        return Err(AuthError::InvalidCredentials.into());
    };

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !state.passwords.matches(&password, &user.password_hash)? {
        tracing::debug!(username = %user.username, "Login failed, wrong password");
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.tokens.issue(user.id, &user.username)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
        expires_in: state.tokens.lifetime_seconds(),
    }))
}
