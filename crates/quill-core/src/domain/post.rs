use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tags::normalize_tags;
use crate::error::DomainError;

/// Opaque post identifier, assigned by the backing store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier received from a caller.
    ///
    /// Only the lowercase hyphenated form is accepted, so each post has exactly
    /// one id string. Anything else is `InvalidId`, never `NotFound`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match Uuid::parse_str(raw) {
            Ok(id) if id.hyphenated().to_string() == raw => Ok(Self(id)),
            _ => Err(DomainError::InvalidId(raw.to_string())),
        }
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw input for create and update, as received from the transport layer.
///
/// `tags` is the free-text, comma separated tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<String>,
}

/// Validated, normalized mutable fields of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl PostInput {
    /// Check required fields and normalize the rest.
    ///
    /// Title and author are stored trimmed. Content keeps its formatting but
    /// must contain something other than whitespace.
    pub fn validate(self) -> Result<PostFields, DomainError> {
        let mut missing = Vec::new();

        let title = required(self.title, "title", &mut missing).map(|t| t.trim().to_string());
        let content = required(self.content, "content", &mut missing);
        let author = required(self.author, "author", &mut missing).map(|a| a.trim().to_string());

        match (title, content, author) {
            (Some(title), Some(content), Some(author)) => Ok(PostFields {
                title,
                content,
                author,
                tags: normalize_tags(self.tags.as_deref()),
            }),
            _ => Err(DomainError::Validation(format!(
                "{} must not be empty",
                missing.join(", ")
            ))),
        }
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

/// A validated post about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub fields: PostFields,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    pub fn new(fields: PostFields, now: DateTime<Utc>) -> Self {
        Self {
            fields,
            created_at: now,
        }
    }

    /// Materialize the record under the identifier chosen by the store.
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.fields.title,
            content: self.fields.content,
            author: self.fields.author,
            tags: self.fields.tags,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Overwrite of the mutable fields of an existing post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostChanges {
    pub fields: PostFields,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Apply changes in place. `id` and `created_at` are never touched.
    pub fn apply(&mut self, changes: PostChanges) {
        self.title = changes.fields.title;
        self.content = changes.fields.content;
        self.author = changes.fields.author;
        self.tags = changes.fields.tags;
        self.updated_at = changes.updated_at;
    }
}

/// Newest first. Stable, so posts created at the same instant keep storage order.
pub fn sort_by_recency(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
