//! Wire payloads of the LogDNA views API
//!
//! Field names map onto the exact JSON keys the service expects. Empty fields
//! are left out of the encoding entirely.

use serde::{Deserialize, Serialize};

/// Body of a create/update view call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apps: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ViewRequest {
    /// A request carrying only a view name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Decoded answer of the views API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewResponse {
    #[serde(rename = "viewID", default, skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ViewResponse {
    /// A response carrying only the id of the affected view
    pub fn with_view_id(view_id: impl Into<String>) -> Self {
        Self {
            view_id: Some(view_id.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_view_request_omits_empty_fields() {
        let request = ViewRequest::named("Test View");
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"name":"Test View"}"#);
    }

    #[test]
    fn test_view_request_field_order_and_keys() {
        let request = ViewRequest {
            name: "errors".to_string(),
            query: "level:error".to_string(),
            apps: vec!["api".to_string()],
            levels: vec!["error".to_string()],
            hosts: vec!["web-1".to_string()],
            category: vec!["Uncategorized".to_string()],
            tags: vec!["prod".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"name":"errors","query":"level:error","apps":["api"],"levels":["error"],"hosts":["web-1"],"category":["Uncategorized"],"tags":["prod"]}"#
        );
    }

    #[test]
    fn test_view_response_key_mapping() {
        let response = ViewResponse::with_view_id("test123456");
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"viewID":"test123456"}"#);
    }

    #[test]
    fn test_view_response_decodes_error_payload() {
        let response: ViewResponse = serde_json::from_value(json!({
            "error": "Invalid service key",
            "code": "Unauthorized",
            "status": "error"
        }))
        .unwrap();
        assert_eq!(response.view_id, None);
        assert_eq!(response.error.as_deref(), Some("Invalid service key"));
        assert_eq!(response.code.as_deref(), Some("Unauthorized"));
        assert_eq!(response.status.as_deref(), Some("error"));
    }
}
