//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod create_comment;
pub mod event_details;
pub mod get_issue;
pub mod list_issues;
pub mod list_projects;
pub mod update_status;

pub use common::IssueStatus;
pub use create_comment::{CreateCommentParams, CreateCommentTool};
pub use event_details::{EventDetailsParams, EventDetailsTool};
pub use get_issue::{GetIssueParams, GetIssueTool};
pub use list_issues::{ListIssuesParams, ListIssuesTool};
pub use list_projects::{ListProjectsParams, ListProjectsTool};
pub use update_status::{UpdateIssueStatusParams, UpdateIssueStatusTool};
