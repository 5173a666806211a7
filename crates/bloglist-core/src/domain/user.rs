use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 3;

/// User entity - represents a registered user in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamp.
    pub fn new(username: String, name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Check registration input before the password is hashed.
pub fn validate_registration(
    username: Option<&str>,
    password: Option<&str>,
) -> Result<(), DomainError> {
    let username = username.unwrap_or_default();
    let password = password.unwrap_or_default();

    if username.is_empty() {
        return Err(DomainError::Validation("`username` is required".to_string()));
    }
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(DomainError::Validation(format!(
            "`username` must be at least {MIN_USERNAME_LEN} characters long"
        )));
    }
    if password.is_empty() {
        return Err(DomainError::Validation("`password` is required".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::Validation(format!(
            "`password` must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration(Some("root"), Some("secret")).is_ok());
        assert!(validate_registration(Some("abc"), Some("abc")).is_ok());

        assert!(validate_registration(None, Some("secret")).is_err());
        assert!(validate_registration(Some("ab"), Some("secret")).is_err());
        assert!(validate_registration(Some("root"), None).is_err());
        assert!(validate_registration(Some("root"), Some("pw")).is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("root".into(), "Superuser".into(), "$argon2id$hash".into());
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("\"username\":\"root\""));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }
}
