use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - the only thing this blog stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Build a post ready for insertion: fresh id, slug derived from the title.
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&title),
            title,
            content,
            created_at: Utc::now(),
        }
    }
}

/// Title and content as submitted, checked for presence.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    /// Both fields must be non-empty once surrounding whitespace is ignored.
    ///
    /// The values themselves are kept as given; the slug is derived from the
    /// untrimmed title.
    pub fn parse(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        let title = title.unwrap_or_default();
        let content = content.unwrap_or_default();

        let mut missing = Vec::new();
        if title.trim().is_empty() {
            missing.push("title");
        }
        if content.trim().is_empty() {
            missing.push("content");
        }

        match missing.as_slice() {
            [] => Ok(Self { title, content }),
            [field] => Err(DomainError::Validation(format!("{field} is required"))),
            _ => Err(DomainError::Validation(
                "Both title and content are required".to_string(),
            )),
        }
    }
}

/// Lowercase the title and turn every space into a hyphen. Nothing else:
/// punctuation, leading/trailing spaces and non-ASCII letters pass through.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}
