use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Blog entity - a bookmarked blog post with its like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Partial replacement for an existing blog. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl Blog {
    /// Create a new blog, validating required fields.
    ///
    /// `title` and `url` must be non-blank. Missing `likes` defaults to 0.
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        url: Option<String>,
        likes: Option<i64>,
        owner_id: Option<Uuid>,
    ) -> Result<Self, DomainError> {
        let title = required("title", title)?;
        let url = required("url", url)?;
        let likes = likes.unwrap_or(0);
        check_likes(likes)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            author: author.unwrap_or_default(),
            url,
            likes,
            owner_id,
            created_at: Utc::now(),
        })
    }

    /// Apply a partial update. On error the blog is left untouched.
    pub fn apply(&mut self, changes: BlogChanges) -> Result<(), DomainError> {
        let title = match changes.title {
            Some(title) => required("title", Some(title))?,
            None => self.title.clone(),
        };
        let url = match changes.url {
            Some(url) => required("url", Some(url))?,
            None => self.url.clone(),
        };
        if let Some(likes) = changes.likes {
            check_likes(likes)?;
            self.likes = likes;
        }

        self.title = title;
        self.url = url;
        if let Some(author) = changes.author {
            self.author = author;
        }
        Ok(())
    }

    /// Whether `user_id` owns this blog.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == Some(user_id)
    }

    /// Blogs without an owner cannot be removed by anyone.
    pub fn ensure_owner(&self, user_id: Uuid) -> Result<(), DomainError> {
        if self.is_owned_by(user_id) {
            Ok(())
        } else {
            Err(DomainError::NotOwner("delete a blog"))
        }
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::Validation(format!("`{field}` is required"))),
    }
}

fn check_likes(likes: i64) -> Result<(), DomainError> {
    if likes < 0 {
        return Err(DomainError::Validation(
            "`likes` must not be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Blog {
        Blog::new(
            Some("Go To Statement Considered Harmful".to_string()),
            Some("Edsger W. Dijkstra".to_string()),
            Some("http://example.com/goto".to_string()),
            Some(5),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_new_defaults_likes_to_zero() {
        let blog = Blog::new(
            Some("t".to_string()),
            None,
            Some("http://u".to_string()),
            None,
            None,
        )
        .unwrap();

        assert_eq!(blog.likes, 0);
        assert_eq!(blog.author, "");
    }

    #[test]
    fn test_new_requires_title_and_url() {
        let missing_title = Blog::new(None, None, Some("http://u".to_string()), None, None);
        assert!(matches!(missing_title, Err(DomainError::Validation(_))));

        let blank_url = Blog::new(Some("t".to_string()), None, Some("  ".to_string()), None, None);
        assert!(matches!(blank_url, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_new_rejects_negative_likes() {
        let result = Blog::new(
            Some("t".to_string()),
            None,
            Some("http://u".to_string()),
            Some(-1),
            None,
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_apply_partial_update() {
        let mut blog = sample();
        blog.apply(BlogChanges {
            likes: Some(42),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(blog.likes, 42);
        assert_eq!(blog.title, "Go To Statement Considered Harmful");
    }

    #[test]
    fn test_apply_invalid_leaves_blog_untouched() {
        let mut blog = sample();
        let before = blog.clone();

        let result = blog.apply(BlogChanges {
            title: Some(String::new()),
            likes: Some(100),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(blog, before);
    }

    #[test]
    fn test_is_owned_by() {
        let owner = Uuid::new_v4();
        let mut blog = sample();
        assert!(!blog.is_owned_by(owner));

        blog.owner_id = Some(owner);
        assert!(blog.is_owned_by(owner));
        assert!(!blog.is_owned_by(Uuid::new_v4()));
    }

    #[test]
    fn test_ensure_owner() {
        let owner = Uuid::new_v4();
        let mut blog = sample();
        assert!(matches!(blog.ensure_owner(owner), Err(DomainError::NotOwner(_))));

        blog.owner_id = Some(owner);
        assert!(blog.ensure_owner(owner).is_ok());
    }
}
