//! Tool Registry - central catalog of all tools.
//!
//! The registry is the single source of truth for tool metadata. The router
//! must stay in sync with it (asserted by test in `router.rs`).

use rmcp::model::Tool;

use super::definitions::{
    CreateCommentTool, EventDetailsTool, GetIssueTool, ListIssuesTool, ListProjectsTool,
    UpdateIssueStatusTool,
};

/// Tool registry - lists all available tools and their metadata.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            CreateCommentTool::NAME,
            EventDetailsTool::NAME,
            GetIssueTool::NAME,
            ListIssuesTool::NAME,
            ListProjectsTool::NAME,
            UpdateIssueStatusTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            CreateCommentTool::to_tool(),
            EventDetailsTool::to_tool(),
            GetIssueTool::to_tool(),
            ListIssuesTool::to_tool(),
            ListProjectsTool::to_tool(),
            UpdateIssueStatusTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tools_have_descriptions() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.as_ref().is_some_and(|d| !d.is_empty()));
        }
    }

    #[test]
    fn test_names_match_metadata() {
        let names = ToolRegistry::tool_names();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(names.len(), tools.len());
        for (name, tool) in names.iter().zip(tools.iter()) {
            assert_eq!(*name, tool.name.as_ref());
        }
    }
}
