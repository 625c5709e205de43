//! Event detail tool.

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

/// Parameters for event retrieval.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EventDetailsParams {
    /// Slug of the project the event belongs to.
    #[schemars(description = "Project slug within the configured organization")]
    pub project_slug: String,

    /// Identifier of the event to fetch.
    #[schemars(description = "Event ID")]
    pub event_id: String,
}

/// Sentry event detail tool implementation.
#[derive(Debug, Clone)]
pub struct EventDetailsTool;

impl EventDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_sentry_event_details";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Retrieve a single Sentry event by project slug and event ID, including its stack trace, tags and context.";

    /// Execute the tool logic.
    pub async fn execute(
        client: &SentryClient,
        params: EventDetailsParams,
    ) -> Result<CallToolResult, McpError> {
        info!(
            "Fetching event {} from project {}",
            params.event_id, params.project_slug
        );

        match client.event(&params.project_slug, &params.event_id).await {
            Ok(event) => Ok(json_result(Self::NAME, &event)),
            Err(e) => Ok(upstream_error_result(Self::NAME, &e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<EventDetailsParams>(),
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
                let params: EventDetailsParams =
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
    fn test_params_require_both_fields() {
        assert!(serde_json::from_value::<EventDetailsParams>(json!({})).is_err());
        assert!(
            serde_json::from_value::<EventDetailsParams>(json!({"project_slug": "backend"}))
                .is_err()
        );
        assert!(
            serde_json::from_value::<EventDetailsParams>(json!({"event_id": "abc123"})).is_err()
        );

        let params: EventDetailsParams = serde_json::from_value(json!({
            "project_slug": "backend",
            "event_id": "abc123",
        }))
        .unwrap();
        assert_eq!(params.event_id, "abc123");
    }
}
