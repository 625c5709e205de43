//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool definition knows how to create its own route; this module only
//! wires them together with the shared Sentry client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::sentry::SentryClient;

use super::definitions::{
    CreateCommentTool, EventDetailsTool, GetIssueTool, ListIssuesTool, ListProjectsTool,
    UpdateIssueStatusTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<SentryClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CreateCommentTool::create_route(client.clone()))
        .with_route(EventDetailsTool::create_route(client.clone()))
        .with_route(GetIssueTool::create_route(client.clone()))
        .with_route(ListIssuesTool::create_route(client.clone()))
        .with_route(ListProjectsTool::create_route(client.clone()))
        .with_route(UpdateIssueStatusTool::create_route(client))
}
