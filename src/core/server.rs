//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tool router.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines its parameters struct, an `execute()` method, and a
//! `create_route()` constructor. The ToolRouter is built dynamically in
//! `domains/tools/router.rs`, so adding a tool does not require modifying
//! this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::{sentry::SentryClient, tools::build_tool_router};

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp. The only state shared
/// across calls is the read-only configured Sentry client binding.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared client for the upstream Sentry API.
    sentry: Arc<SentryClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the configured credential cannot be turned into an HTTP
    /// client binding; this aborts startup.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let config = Arc::new(config);
        let sentry = Arc::new(SentryClient::new(&config.sentry)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(sentry.clone()),
            config,
            sentry,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared Sentry client.
    pub fn sentry(&self) -> &Arc<SentryClient> {
        &self.sentry
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "MCP server for a self-hosted Sentry instance. Provides tools to look up \
                 issues and events, list projects, search a project's issues, update issue \
                 status and add issue comments."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{LoggingConfig, SentryConfig, ServerConfig};
    use crate::core::transport::TransportConfig;

    fn test_config() -> Config {
        Config {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            sentry: SentryConfig {
                url: "https://sentry.example.com".to_string(),
                auth_token: "token".to_string(),
                organization: "acme".to_string(),
            },
        }
    }

    #[test]
    fn test_server_construction() {
        let server = McpServer::new(test_config()).unwrap();
        assert_eq!(server.name(), "sentry-mcp-server");
        assert_eq!(server.sentry().organization(), "acme");
    }

    #[test]
    fn test_capabilities_advertise_tools_only() {
        let server = McpServer::new(test_config()).unwrap();
        let info = server.get_info();
        let capabilities = info.capabilities;
        assert!(capabilities.tools.is_some());
        assert!(capabilities.resources.is_none());
        assert!(capabilities.prompts.is_none());
    }
}
