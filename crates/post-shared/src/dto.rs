//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Request to update a post. Absent or empty fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Body of the ping endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
    pub message: String,
}

impl PingResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is running".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_all_fields() {
        let err = serde_json::from_str::<CreatePostRequest>(r#"{"title":"A","content":"B"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_update_request_fields_optional() {
        let req: UpdatePostRequest = serde_json::from_str(r#"{"title":"Z"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("Z"));
        assert!(req.content.is_none());
        assert!(req.author.is_none());
    }
}
