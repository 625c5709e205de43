//! Issue status mutation tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::common::{IssueStatus, json_result, upstream_error_result};
use crate::domains::sentry::SentryClient;

/// Parameters for issue status updates.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateIssueStatusParams {
    /// Numeric id of the issue to update.
    #[schemars(description = "Numeric Sentry issue ID")]
    pub issue_id: String,

    /// The status to set: resolved, ignored or unresolved.
    #[schemars(description = "New status: 'resolved', 'ignored' or 'unresolved'")]
    pub status: IssueStatus,
}

/// Sentry issue status update tool implementation.
#[derive(Debug, Clone)]
pub struct UpdateIssueStatusTool;

impl UpdateIssueStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_sentry_issue_status";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update the status of a Sentry issue to resolved, ignored or unresolved. Returns the updated issue.";

    /// Execute the tool logic.
    pub async fn execute(
        client: &SentryClient,
        params: UpdateIssueStatusParams,
    ) -> Result<CallToolResult, McpError> {
        info!(
            "Updating issue {} to status {}",
            params.issue_id,
            params.status.as_str()
        );

        match client
            .update_issue_status(&params.issue_id, params.status.as_str())
            .await
        {
            Ok(issue) => Ok(json_result(Self::NAME, &issue)),
            Err(e) => Ok(upstream_error_result(Self::NAME, &e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateIssueStatusParams>(),
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
                let params: UpdateIssueStatusParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&client, params).await
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_require_id_and_status() {
        assert!(serde_json::from_value::<UpdateIssueStatusParams>(json!({})).is_err());
        assert!(
            serde_json::from_value::<UpdateIssueStatusParams>(json!({"issue_id": "42"})).is_err()
        );
        assert!(
            serde_json::from_value::<UpdateIssueStatusParams>(json!({
                "issue_id": "42",
                "status": "deleted",
            }))
            .is_err()
        );

        let params: UpdateIssueStatusParams = serde_json::from_value(json!({
            "issue_id": "42",
            "status": "resolved",
        }))
        .unwrap();
        assert_eq!(params.status, IssueStatus::Resolved);
    }
}
