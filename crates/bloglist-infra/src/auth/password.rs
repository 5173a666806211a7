//! Argon2id password hashes in PHC string format.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use bloglist_core::ports::{AuthError, PasswordService};

#[derive(Default)]
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self::default()
    }
}

fn hash_error(e: argon2::password_hash::Error) -> AuthError {
    AuthError::Hash(e.to_string())
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(hash_error)?;
        Ok(phc.to_string())
    }

    fn matches(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let stored = PasswordHash::new(hash).map_err(hash_error)?;
        match self.argon2.verify_password(password.as_bytes(), &stored) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(hash_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_match() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("sekret").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(service.matches("sekret", &hash).unwrap());
        assert!(!service.matches("wrong", &hash).unwrap());
    }

    #[test]
    fn test_each_hash_is_salted() {
        let service = Argon2PasswordService::new();
        assert_ne!(service.hash("abc").unwrap(), service.hash("abc").unwrap());
    }

    #[test]
    fn test_unreadable_hash_is_an_error() {
        let service = Argon2PasswordService::new();
        assert!(matches!(
            service.matches("abc", "plaintext"),
            Err(AuthError::Hash(_))
        ));
    }
}
