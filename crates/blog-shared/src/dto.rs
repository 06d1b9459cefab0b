//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Request to update a post. Any subset of fields may be sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_every_field() {
        let err = serde_json::from_str::<CreatePostRequest>(r#"{"title":"A","content":"B"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("author"));
    }

    #[test]
    fn test_update_request_accepts_subset() {
        let req: UpdatePostRequest = serde_json::from_str(r#"{"content":"D"}"#).unwrap();
        assert_eq!(req.content.as_deref(), Some("D"));
        assert!(req.title.is_none());
        assert!(req.author.is_none());

        let empty: UpdatePostRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.title.is_none());
    }
}
