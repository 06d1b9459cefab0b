use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Server-assigned post identifier.
pub type PostId = u64;

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

impl Post {
    /// Create a new post stamped with the current time.
    pub fn new(id: PostId, new_post: NewPost) -> Self {
        Self {
            id,
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
            date: Utc::now(),
        }
    }

    /// Overwrite the fields the patch supplies with a non-empty value.
    ///
    /// `id` and `date` are never touched.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title.filter(|v| !v.is_empty()) {
            self.title = title;
        }
        if let Some(content) = patch.content.filter(|v| !v.is_empty()) {
            self.content = content;
        }
        if let Some(author) = patch.author.filter(|v| !v.is_empty()) {
            self.author = author;
        }
    }
}

/// Input for creating a post. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    /// Reject blank fields, naming every offending one.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("content", &self.content),
            ("author", &self.author),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }
}

/// Partial update. `None` and empty strings leave the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostPatch {
    /// True when applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        [&self.title, &self.content, &self.author]
            .iter()
            .all(|field| field.as_deref().is_none_or(str::is_empty))
    }
}

/// Next free id: one past the highest id held, or 1 for an empty store.
pub fn next_post_id(posts: &[Post]) -> PostId {
    posts.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: PostId) -> Post {
        Post::new(id, NewPost::new("A", "B", "C"))
    }

    #[test]
    fn test_next_id_starts_at_one() {
        assert_eq!(next_post_id(&[]), 1);
    }

    #[test]
    fn test_next_id_skips_past_gaps() {
        // ids 1 and 2 were created, 1 was deleted
        let posts = vec![sample(2)];
        assert_eq!(next_post_id(&posts), 3);

        let posts = vec![sample(5), sample(3)];
        assert_eq!(next_post_id(&posts), 6);
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut post = sample(1);
        let date = post.date;

        post.apply(PostPatch {
            content: Some("D".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "A");
        assert_eq!(post.content, "D");
        assert_eq!(post.author, "C");
        assert_eq!(post.date, date);
        assert_eq!(post.id, 1);
    }

    #[test]
    fn test_apply_ignores_empty_strings() {
        let mut post = sample(1);
        post.apply(PostPatch {
            title: Some(String::new()),
            author: Some("Z".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "A");
        assert_eq!(post.author, "Z");
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(PostPatch::default().is_empty());
        assert!(
            PostPatch {
                title: Some(String::new()),
                ..Default::default()
            }
            .is_empty()
        );
        assert!(
            !PostPatch {
                author: Some("x".to_string()),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_validate_names_blank_fields() {
        assert!(NewPost::new("A", "B", "C").validate().is_ok());

        let err = NewPost::new("", "B", "  ").validate().unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert!(msg.contains("title"));
                assert!(msg.contains("author"));
                assert!(!msg.contains("content"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_post_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample(7)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "A");
        assert_eq!(json["content"], "B");
        assert_eq!(json["author"], "C");
        assert!(json["date"].is_string());
    }
}
