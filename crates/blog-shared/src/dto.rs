//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a post.
///
/// Both fields are optional at the wire level so that a missing field reaches
/// validation and is answered with a readable 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Response to a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub message: String,
    pub post: PostResponse,
}

impl CreatePostResponse {
    pub fn created(post: PostResponse) -> Self {
        Self {
            message: "Post created successfully".to_string(),
            post,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_missing_fields() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"title": "Only title"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("Only title"));
        assert!(req.content.is_none());

        let req: CreatePostRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
    }

    #[test]
    fn test_create_request_null_field() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title": null, "content": "x"}"#).unwrap();
        assert!(req.title.is_none());
    }
}
