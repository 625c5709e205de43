//! Issue retrieval tool.
//!
//! Fetches one Sentry issue by id or URL and enriches it with the latest
//! event recorded for that issue.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

use super::common::{json_result, upstream_error_result};
use crate::domains::sentry::{SentryClient, SentryResult, extract_issue_id};

/// Parameters for issue retrieval.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetIssueParams {
    /// The issue to fetch, as a bare numeric id or a full issue URL.
    #[schemars(description = "Sentry issue ID or full issue URL")]
    pub issue_id_or_url: String,
}

/// Sentry issue retrieval tool implementation.
#[derive(Debug, Clone)]
pub struct GetIssueTool;

impl GetIssueTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_sentry_issue";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieve a Sentry issue by its numeric ID or full issue URL. Returns the issue details together with its latest event when one is available.";

    /// Execute the tool logic.
    pub async fn execute(
        client: &SentryClient,
        params: GetIssueParams,
    ) -> Result<CallToolResult, McpError> {
        let issue_id = extract_issue_id(&params.issue_id_or_url).ok_or_else(|| {
            McpError::invalid_params(
                format!(
                    "Could not extract an issue ID from '{}'",
                    params.issue_id_or_url
                ),
                None,
            )
        })?;

        info!("Fetching issue {}", issue_id);

        let issue = match client.issue(&issue_id).await {
            Ok(issue) => issue,
            Err(e) => return Ok(upstream_error_result(Self::NAME, &e)),
        };

        // Enrichment only: a missing latest event never fails the call.
        let latest_event = client.latest_event(&issue_id).await;
        if let Err(e) = &latest_event {
            warn!("Could not fetch latest event for issue {}: {}", issue_id, e);
        }

        Ok(json_result(
            Self::NAME,
            &enrichment_payload(issue, latest_event),
        ))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetIssueParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router.
    pub fn create_route<S>(client: Arc<SentryClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: GetIssueParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&client, params).await
            }
            .boxed()
        })
    }
}

/// Combine the issue with the outcome of the latest-event fetch. A failed
/// event fetch degrades to a JSON null instead of failing the call; the
/// issue record is useful on its own.
fn enrichment_payload(issue: Value, latest_event: SentryResult<Value>) -> Value {
    json!({
        "issue": issue,
        "latestEvent": latest_event.unwrap_or(Value::Null),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::sentry::SentryError;

    #[test]
    fn test_params_require_issue_reference() {
        assert!(serde_json::from_value::<GetIssueParams>(json!({})).is_err());
        assert!(serde_json::from_value::<GetIssueParams>(json!({"issue_id_or_url": 42})).is_err());

        let params: GetIssueParams =
            serde_json::from_value(json!({"issue_id_or_url": "12345"})).unwrap();
        assert_eq!(params.issue_id_or_url, "12345");
    }

    #[test]
    fn test_tool_metadata() {
        let tool = GetIssueTool::to_tool();
        assert_eq!(tool.name, "get_sentry_issue");
        assert!(tool.description.is_some());
    }

    #[test]
    fn test_failed_event_fetch_degrades_to_null() {
        let issue = json!({"id": "42", "title": "TypeError in checkout"});
        let error = SentryError::Api {
            status: 404,
            body: String::new(),
        };

        let payload = enrichment_payload(issue.clone(), Err(error));
        assert_eq!(payload["issue"], issue);
        assert_eq!(payload["latestEvent"], Value::Null);

        // The call still succeeds on the issue record alone
        let result = json_result(GetIssueTool::NAME, &payload);
        assert_ne!(result.is_error, Some(true));
    }

    #[test]
    fn test_successful_event_fetch_attached() {
        let payload = enrichment_payload(
            json!({"id": "42"}),
            Ok(json!({"eventID": "abc123", "message": "boom"})),
        );
        assert_eq!(payload["latestEvent"]["eventID"], "abc123");
    }
}
