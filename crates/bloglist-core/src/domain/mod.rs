//! Domain entities - the core business objects.

mod blog;
mod user;

pub use blog::{Blog, BlogChanges};
pub use user::{MIN_PASSWORD_LEN, MIN_USERNAME_LEN, User, validate_registration};
