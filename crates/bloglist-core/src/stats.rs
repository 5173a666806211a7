//! Summary statistics over a list of blogs.
//!
//! Every function is pure and works on blogs already loaded in memory.
//! Empty input yields `0` or `None`; ties always go to whichever blog
//! (or author) appears first in the input.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::Blog;

/// The most liked blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: String,
    pub likes: i64,
}

/// The author with the most blogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: usize,
}

/// The author with the most likes across all their blogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i64,
}

/// Sum of likes across all blogs, saturating at `i64::MAX`.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().fold(0, |sum, b| sum.saturating_add(b.likes))
}

/// The blog with the most likes.
pub fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    let mut best: Option<&Blog> = None;
    for blog in blogs {
        if best.is_none_or(|b| blog.likes > b.likes) {
            best = Some(blog);
        }
    }

    best.map(|b| FavoriteBlog {
        title: b.title.clone(),
        author: b.author.clone(),
        likes: b.likes,
    })
}

/// The author who wrote the most blogs.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    let (author, count) = max_by_author(blogs, |_| 1usize)?;
    Some(AuthorBlogs {
        author,
        blogs: count,
    })
}

/// The author whose blogs collected the most likes in total.
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    let (author, likes) = max_by_author(blogs, |b| b.likes)?;
    Some(AuthorLikes { author, likes })
}

/// Group blogs by author, summing `value` per author, and return the
/// author with the largest total.
///
/// The first pass builds the per-author totals while remembering the order
/// in which authors first appear. The second pass walks that order and only
/// replaces the current best on a strictly larger total, so the earliest
/// author wins a tie regardless of how the map iterates.
fn max_by_author<V, F>(blogs: &[Blog], value: F) -> Option<(String, V)>
where
    V: Tally,
    F: Fn(&Blog) -> V,
{
    let mut totals: HashMap<&str, V> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for blog in blogs {
        let author = blog.author.as_str();
        let total = totals.entry(author).or_insert_with(|| {
            order.push(author);
            V::default()
        });
        *total = total.plus(value(blog));
    }

    let mut best: Option<(&str, V)> = None;
    for author in order {
        let total = totals[author];
        if best.is_none_or(|(_, top)| total > top) {
            best = Some((author, total));
        }
    }

    best.map(|(author, total)| (author.to_string(), total))
}

/// Per-author running total that clamps instead of overflowing.
trait Tally: Copy + Default + Ord {
    fn plus(self, other: Self) -> Self;
}

impl Tally for usize {
    fn plus(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl Tally for i64 {
    fn plus(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(title: &str, author: &str, likes: i64) -> Blog {
        Blog::new(
            Some(title.to_string()),
            Some(author.to_string()),
            Some(format!("http://example.com/{title}")),
            Some(likes),
            None,
        )
        .unwrap()
    }

    fn mixed() -> Vec<Blog> {
        vec![blog("a1", "A", 5), blog("b1", "B", 10), blog("a2", "A", 3)]
    }

    fn classic() -> Vec<Blog> {
        vec![
            blog("React patterns", "Michael Chan", 7),
            blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
            blog("First class tests", "Robert C. Martin", 10),
            blog("TDD harms architecture", "Robert C. Martin", 0),
            blog("Type wars", "Robert C. Martin", 2),
        ]
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(total_likes(&[]), 0);
        assert_eq!(favorite_blog(&[]), None);
        assert_eq!(most_blogs(&[]), None);
        assert_eq!(most_likes(&[]), None);
    }

    #[test]
    fn test_total_likes() {
        assert_eq!(total_likes(&mixed()), 18);
        assert_eq!(total_likes(&classic()), 36);
        assert_eq!(total_likes(&[blog("only", "X", 5)]), 5);
    }

    #[test]
    fn test_favorite_blog() {
        assert_eq!(
            favorite_blog(&mixed()),
            Some(FavoriteBlog {
                title: "b1".to_string(),
                author: "B".to_string(),
                likes: 10,
            })
        );
        assert_eq!(
            favorite_blog(&classic()).map(|f| f.title),
            Some("Canonical string reduction".to_string())
        );
    }

    #[test]
    fn test_favorite_blog_tie_goes_to_first() {
        let blogs = vec![blog("first", "A", 4), blog("second", "B", 4)];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "first");
    }

    #[test]
    fn test_most_blogs() {
        assert_eq!(
            most_blogs(&mixed()),
            Some(AuthorBlogs {
                author: "A".to_string(),
                blogs: 2,
            })
        );
        assert_eq!(
            most_blogs(&classic()),
            Some(AuthorBlogs {
                author: "Robert C. Martin".to_string(),
                blogs: 3,
            })
        );
    }

    #[test]
    fn test_most_likes() {
        assert_eq!(
            most_likes(&mixed()),
            Some(AuthorLikes {
                author: "A".to_string(),
                likes: 8,
            })
        );
        assert_eq!(
            most_likes(&classic()),
            Some(AuthorLikes {
                author: "Edsger W. Dijkstra".to_string(),
                likes: 17,
            })
        );
    }

    #[test]
    fn test_author_ties_go_to_first_seen() {
        let blogs = vec![
            blog("z1", "Zed", 1),
            blog("a1", "Ann", 1),
            blog("z2", "Zed", 2),
            blog("a2", "Ann", 2),
        ];

        assert_eq!(most_blogs(&blogs).unwrap().author, "Zed");
        assert_eq!(most_likes(&blogs).unwrap().author, "Zed");
    }

    #[test]
    fn test_authors_match_exactly() {
        let blogs = vec![blog("1", "ann", 9), blog("2", "Ann", 1), blog("3", "Ann", 1)];

        assert_eq!(most_blogs(&blogs).unwrap().author, "Ann");
        assert_eq!(most_likes(&blogs).unwrap().author, "ann");
    }

    #[test]
    fn test_huge_like_counts_saturate() {
        let blogs = vec![
            blog("viral", "A", i64::MAX),
            blog("also viral", "A", i64::MAX),
            blog("quiet", "B", 1),
        ];

        assert_eq!(total_likes(&blogs), i64::MAX);
        assert_eq!(
            most_likes(&blogs),
            Some(AuthorLikes {
                author: "A".to_string(),
                likes: i64::MAX,
            })
        );
    }
}
