//! Issue comment tool.

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

/// Parameters for issue comments.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateCommentParams {
    /// Numeric id of the issue to comment on.
    #[schemars(description = "Numeric Sentry issue ID")]
    pub issue_id: String,

    /// The comment body.
    #[schemars(description = "Text of the comment")]
    pub comment_text: String,
}

/// Sentry issue comment tool implementation.
#[derive(Debug, Clone)]
pub struct CreateCommentTool;

impl CreateCommentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_sentry_issue_comment";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a comment to a Sentry issue. Returns the created comment record.";

    /// Execute the tool logic.
    pub async fn execute(
        client: &SentryClient,
        params: CreateCommentParams,
    ) -> Result<CallToolResult, McpError> {
        info!("Adding comment to issue {}", params.issue_id);

        match client
            .create_issue_comment(&params.issue_id, &params.comment_text)
            .await
        {
            Ok(comment) => Ok(json_result(Self::NAME, &comment)),
            Err(e) => Ok(upstream_error_result(Self::NAME, &e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateCommentParams>(),
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
                let params: CreateCommentParams =
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
    fn test_params_require_id_and_text() {
        assert!(serde_json::from_value::<CreateCommentParams>(json!({})).is_err());
        assert!(serde_json::from_value::<CreateCommentParams>(json!({"issue_id": "42"})).is_err());

        let params: CreateCommentParams = serde_json::from_value(json!({
            "issue_id": "42",
            "comment_text": "Looking into this",
        }))
        .unwrap();
        assert_eq!(params.comment_text, "Looking into this");
    }
}
