use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - represents a blog post or article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated ID and matching timestamps.
    pub fn new(draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update and refresh `updated_at`.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        self.updated_at = Utc::now();
    }
}

/// Input for a new post.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostDraft {
    /// Every field must hold something other than whitespace.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<String> = [
            ("title", &self.title),
            ("content", &self.content),
            ("author", &self.author),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| format!("{field} is required"))
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(missing.join(", ")))
        }
    }
}

/// Fields to change on an existing post.
///
/// Empty strings are treated the same as absent fields, so a stored value
/// can never be cleared through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    title: Option<String>,
    content: Option<String>,
    author: Option<String>,
}

impl PostPatch {
    pub fn new(title: Option<String>, content: Option<String>, author: Option<String>) -> Self {
        Self {
            title: non_empty(title),
            content: non_empty(content),
            author: non_empty(author),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// True when applying the patch would only touch `updated_at`.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "A".to_string(),
            content: "B".to_string(),
            author: "C".to_string(),
        }
    }

    #[test]
    fn test_new_post_has_id_and_equal_timestamps() {
        let post = Post::new(draft());
        assert!(!post.id.is_empty());
        assert_eq!(post.created_at, post.updated_at);
        assert_ne!(post.id, Post::new(draft()).id);
    }

    /// A post last written an hour ago, so a refresh is always visible.
    fn stale_post() -> Post {
        let mut post = Post::new(draft());
        post.created_at -= Duration::hours(1);
        post.updated_at = post.created_at;
        post
    }

    #[test]
    fn test_apply_title_only() {
        let mut post = stale_post();
        let before = post.clone();

        post.apply(PostPatch::new(Some("Z".to_string()), None, None));

        assert_eq!(post.title, "Z");
        assert_eq!(post.content, before.content);
        assert_eq!(post.author, before.author);
        assert!(post.updated_at > before.updated_at);
        assert_eq!(post.created_at, before.created_at);
        assert_eq!(post.id, before.id);
    }

    #[test]
    fn test_empty_patch_only_touches_updated_at() {
        let patch = PostPatch::new(Some(String::new()), None, Some(String::new()));
        assert!(patch.is_empty());

        let mut post = stale_post();
        let before = post.clone();
        post.apply(patch);

        assert!(post.updated_at > before.updated_at);
        assert_eq!(
            Post {
                updated_at: before.updated_at,
                ..post
            },
            before
        );
    }

    #[test]
    fn test_draft_requires_every_field() {
        assert!(draft().validate().is_ok());

        let blank = PostDraft {
            title: "A".to_string(),
            content: "  ".to_string(),
            author: String::new(),
        };

        match blank.validate() {
            Err(DomainError::Validation(msg)) => {
                assert_eq!(msg, "content is required, author is required");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
