//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services: the tool registry
//! for tool listing and invocation, the prompt service for guided prompts.
//!
//! Tools are declared in `domains/tools/catalog/` as static descriptors;
//! adding an endpoint there is enough, this file never changes.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use crate::domains::{
    prompts::PromptService,
    tools::{ToolError, ToolRegistry},
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and
/// coordinates between the domain services to handle protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry handling tool listing and invocation.
    tool_registry: Arc<ToolRegistry>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let tool_registry = Arc::new(ToolRegistry::new(&config.api));
        let prompt_service = Arc::new(PromptService::new());

        Self {
            config,
            tool_registry,
            prompt_service,
        }
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
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Alpha Vantage market data server. Provides tools for stock, forex, \
                 crypto, commodity, economic, and technical-indicator data, plus \
                 guided prompts for each tool."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context, request), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let args = request.arguments.unwrap_or_default();

        match self.tool_registry.invoke(&request.name, &args).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                warn!("Tool {} failed: {}", request.name, e);
                Err(tool_call_error(&request.name, e))
            }
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        Ok(ListPromptsResult {
            prompts: self.prompt_service.list_prompts(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        // Convert serde_json::Map to HashMap<String, String>
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        });
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

/// Wrap a tool failure into its protocol-level error, annotated with the
/// operation name. Caller mistakes map to invalid-params; everything else
/// is reported as an internal error.
fn tool_call_error(name: &str, error: ToolError) -> McpError {
    if error.is_caller_error() {
        McpError::invalid_params(format!("{name}: {error}"), None)
    } else {
        McpError::internal_error(format!("Error processing {name}: {error}"), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;

    fn server() -> McpServer {
        McpServer::new(Config::new(ApiConfig {
            api_key: "demo".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
        }))
    }

    #[test]
    fn test_server_identity() {
        let server = server();
        assert_eq!(server.name(), "alphavantage");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_capabilities_advertise_tools_and_prompts() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.resources.is_none());
    }

    #[test]
    fn test_caller_errors_name_the_operation() {
        let err = tool_call_error(
            "stock_quote",
            ToolError::MissingArguments(vec!["symbol".to_string()]),
        );
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("stock_quote"));
        assert!(err.message.contains("symbol"));
    }

    #[test]
    fn test_upstream_errors_name_the_operation_and_status() {
        let err = tool_call_error(
            "fx_daily",
            ToolError::UpstreamStatus {
                status: 503,
                message: "unavailable".to_string(),
            },
        );
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("fx_daily"));
        assert!(err.message.contains("503"));
    }
}
