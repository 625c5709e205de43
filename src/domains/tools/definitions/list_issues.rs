//! Issue listing tool.
//!
//! Lists a project's issues, optionally filtered by a free-text Sentry
//! search query and/or a workflow status.

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

use super::common::{IssueStatus, compose_issue_query, json_result, upstream_error_result};
use crate::domains::sentry::SentryClient;

/// Parameters for issue listing.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListIssuesParams {
    /// Slug of the project whose issues are listed.
    #[schemars(description = "Project slug within the configured organization")]
    pub project_slug: String,

    /// Optional free-text Sentry search query (e.g. "TypeError").
    #[schemars(description = "Optional Sentry search query")]
    #[serde(default)]
    pub query: Option<String>,

    /// Optional status filter: resolved, unresolved or ignored.
    #[schemars(description = "Optional status filter: 'resolved', 'unresolved' or 'ignored'")]
    #[serde(default)]
    pub status: Option<IssueStatus>,
}

/// Sentry issue listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListIssuesTool;

impl ListIssuesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_sentry_issues";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List issues in a Sentry project. Supports an optional free-text search query and an optional status filter (resolved, unresolved, ignored); both are combined into a single server-side search.";

    /// Execute the tool logic.
    pub async fn execute(
        client: &SentryClient,
        params: ListIssuesParams,
    ) -> Result<CallToolResult, McpError> {
        let query = compose_issue_query(params.query.as_deref(), params.status);

        info!(
            "Listing issues for project {} (query: {:?})",
            params.project_slug, query
        );

        match client
            .project_issues(&params.project_slug, query.as_deref())
            .await
        {
            Ok(issues) => Ok(json_result(Self::NAME, &issues)),
            Err(e) => Ok(upstream_error_result(Self::NAME, &e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListIssuesParams>(),
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
                let params: ListIssuesParams =
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
    fn test_params_require_project_slug() {
        assert!(serde_json::from_value::<ListIssuesParams>(json!({})).is_err());
        assert!(
            serde_json::from_value::<ListIssuesParams>(json!({"query": "is:unresolved"})).is_err()
        );
    }

    #[test]
    fn test_params_optional_fields() {
        let params: ListIssuesParams =
            serde_json::from_value(json!({"project_slug": "backend"})).unwrap();
        assert_eq!(params.project_slug, "backend");
        assert!(params.query.is_none());
        assert!(params.status.is_none());

        let params: ListIssuesParams = serde_json::from_value(json!({
            "project_slug": "backend",
            "query": "TypeError",
            "status": "ignored",
        }))
        .unwrap();
        assert_eq!(params.status, Some(IssueStatus::Ignored));
    }

    #[test]
    fn test_params_reject_unknown_status() {
        let result = serde_json::from_value::<ListIssuesParams>(json!({
            "project_slug": "backend",
            "status": "snoozed",
        }));
        assert!(result.is_err());
    }
}
