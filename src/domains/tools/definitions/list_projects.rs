//! Project listing tool.

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

use super::common::{json_result, upstream_error_result};
use crate::domains::sentry::SentryClient;

/// Parameters for project listing. The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListProjectsParams {}

/// Sentry project listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListProjectsTool;

impl ListProjectsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_sentry_projects";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all projects in the configured Sentry organization, including their slugs, names and platforms.";

    /// Execute the tool logic.
    pub async fn execute(client: &SentryClient) -> Result<CallToolResult, McpError> {
        info!("Listing projects for organization {}", client.organization());

        match client.projects().await {
            Ok(projects) => Ok(json_result(Self::NAME, &projects)),
            Err(e) => Ok(upstream_error_result(Self::NAME, &e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListProjectsParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            async move { Self::execute(&client).await }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_accept_empty_arguments() {
        assert!(serde_json::from_value::<ListProjectsParams>(serde_json::json!({})).is_ok());
    }

    #[test]
    fn test_tool_metadata() {
        let tool = ListProjectsTool::to_tool();
        assert_eq!(tool.name, "list_sentry_projects");
    }
}
