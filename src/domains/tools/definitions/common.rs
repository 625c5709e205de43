//! Common utilities shared across Sentry tools.
//!
//! This module provides response formatting, upstream query composition,
//! and the error classification that turns upstream failures into uniform
//! error results.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domains::sentry::SentryError;

/// Issue workflow status accepted by the filtering and mutation tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Resolved,
    Unresolved,
    Ignored,
}

impl IssueStatus {
    /// The wire form used in API bodies and `is:` query tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::Unresolved => "unresolved",
            Self::Ignored => "ignored",
        }
    }
}

/// Compose the server-side issue search query from an optional free-text
/// query and an optional status filter. The status becomes an `is:<status>`
/// token, space-joined after the free text when both are present. An empty
/// free-text query counts as absent.
pub fn compose_issue_query(query: Option<&str>, status: Option<IssueStatus>) -> Option<String> {
    let query = query.filter(|q| !q.is_empty());
    match (query, status) {
        (Some(q), Some(s)) => Some(format!("{} is:{}", q, s.as_str())),
        (Some(q), None) => Some(q.to_string()),
        (None, Some(s)) => Some(format!("is:{}", s.as_str())),
        (None, None) => None,
    }
}

/// Create a success result carrying the upstream JSON, pretty-printed.
pub fn json_result(tool_name: &str, value: &Value) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to execute tool {}: {}", tool_name, e)),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Classify an upstream failure into a uniform error result.
///
/// Auth failures (401/403) and missing resources (404) get dedicated
/// messages naming the failing tool, whichever error variant carried the
/// status; every other failure keeps the composed message with the status
/// and raw body when a response was received.
pub fn upstream_error_result(tool_name: &str, error: &SentryError) -> CallToolResult {
    let message = match error.status() {
        Some(status @ (401 | 403)) => format!(
            "Permission denied executing {}: the Sentry token lacks the required access (status {})",
            tool_name, status
        ),
        Some(404) => format!("Resource not found while executing {}", tool_name),
        _ => match error {
            SentryError::Api { status, body } => format!(
                "Error executing {}: Sentry API request failed with status {}: {}",
                tool_name, status, body
            ),
            other => format!("Error executing {}: {}", tool_name, other),
        },
    };
    error_result(&message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_compose_query_text_and_status() {
        assert_eq!(
            compose_issue_query(Some("is:unresolved"), Some(IssueStatus::Ignored)),
            Some("is:unresolved is:ignored".to_string())
        );
    }

    #[test]
    fn test_compose_query_status_only() {
        assert_eq!(
            compose_issue_query(None, Some(IssueStatus::Resolved)),
            Some("is:resolved".to_string())
        );
    }

    #[test]
    fn test_compose_query_text_only() {
        assert_eq!(
            compose_issue_query(Some("TypeError"), None),
            Some("TypeError".to_string())
        );
    }

    #[test]
    fn test_compose_query_empty() {
        assert_eq!(compose_issue_query(None, None), None);
        // An empty free-text query behaves like no query at all
        assert_eq!(
            compose_issue_query(Some(""), Some(IssueStatus::Ignored)),
            Some("is:ignored".to_string())
        );
    }

    #[test]
    fn test_not_found_classification() {
        let error = SentryError::Api {
            status: 404,
            body: "{\"detail\": \"not found\"}".to_string(),
        };
        let result = upstream_error_result("get_sentry_issue", &error);
        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.contains("not found"));
        assert!(text.contains("get_sentry_issue"));
    }

    #[test]
    fn test_permission_classification() {
        for status in [401, 403] {
            let error = SentryError::Api {
                status,
                body: String::new(),
            };
            let result = upstream_error_result("list_sentry_projects", &error);
            assert_eq!(result.is_error, Some(true));
            let text = result_text(&result);
            assert!(text.contains("Permission denied"));
            assert!(text.contains("list_sentry_projects"));
        }
    }

    #[test]
    fn test_other_status_keeps_body() {
        let error = SentryError::Api {
            status: 500,
            body: "upstream exploded".to_string(),
        };
        let result = upstream_error_result("get_sentry_event_details", &error);
        let text = result_text(&result);
        assert!(text.contains("500"));
        assert!(text.contains("upstream exploded"));
        assert!(text.contains("get_sentry_event_details"));
    }

    #[test]
    fn test_status_wire_form() {
        assert_eq!(IssueStatus::Resolved.as_str(), "resolved");
        assert_eq!(IssueStatus::Unresolved.as_str(), "unresolved");
        assert_eq!(IssueStatus::Ignored.as_str(), "ignored");
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        assert!(serde_json::from_value::<IssueStatus>(serde_json::json!("resolved")).is_ok());
        assert!(serde_json::from_value::<IssueStatus>(serde_json::json!("muted")).is_err());
    }

    #[test]
    fn test_json_result_pretty_prints() {
        let value = serde_json::json!({"id": "42"});
        let result = json_result("get_sentry_issue", &value);
        assert_ne!(result.is_error, Some(true));
        assert!(result_text(&result).contains("\"id\": \"42\""));
    }
}
