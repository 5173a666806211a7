//! Handler errors rendered as problem details (RFC 7807).

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use bloglist_core::error::{DomainError, RepoError};
use bloglist_core::ports::AuthError;
use bloglist_shared::ErrorResponse;
use std::fmt;

/// Everything a handler can fail with, one variant per HTTP status.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, detail) = match self {
            AppError::NotFound(d) => ("not found", d),
            AppError::BadRequest(d) => ("bad request", d),
            AppError::Unauthorized(d) => ("unauthorized", d),
            AppError::Forbidden(d) => ("forbidden", d),
            AppError::Internal(d) => ("internal", d),
        };
        write!(f, "{kind}: {detail}")
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(d) => ErrorResponse::not_found(d),
            AppError::BadRequest(d) => ErrorResponse::bad_request(d),
            AppError::Unauthorized(d) => ErrorResponse::unauthorized(d),
            AppError::Forbidden(d) => ErrorResponse::forbidden(d),
            AppError::Internal(d) => {
                // Detail stays in the log, never in the body.
                tracing::error!(detail = %d, "Request failed");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Validation(msg) | DomainError::Duplicate(msg) => {
                AppError::BadRequest(msg)
            }
            DomainError::NotOwner(_) => AppError::Forbidden(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("record does not exist".to_string()),
            RepoError::Constraint(msg) => AppError::BadRequest(msg),
            RepoError::Connection(_) | RepoError::Query(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Hash(_) => AppError::Internal(err.to_string()),
            // Token decoding detail is not echoed back to the client.
            AuthError::InvalidToken(_) => AppError::Unauthorized("token invalid".to_string()),
            AuthError::InvalidCredentials | AuthError::TokenExpired | AuthError::MissingToken => {
                AppError::Unauthorized(err.to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::from(DomainError::Validation("x".into())), 400),
            (AppError::from(DomainError::Duplicate("x".into())), 400),
            (AppError::from(RepoError::Constraint("x".into())), 400),
            (AppError::from(AuthError::InvalidCredentials), 401),
            (AppError::from(AuthError::TokenExpired), 401),
            (AppError::from(DomainError::NotOwner("delete a blog")), 403),
            (AppError::from(DomainError::blog_not_found(uuid::Uuid::nil())), 404),
            (AppError::from(RepoError::NotFound), 404),
            (AppError::from(RepoError::Query("boom".into())), 500),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code().as_u16(), status, "{error}");
        }
    }
}
