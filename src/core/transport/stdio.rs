//! STDIO transport implementation.
//!
//! The default MCP mode: requests arrive on stdin and responses leave on
//! stdout. This is why every log line in the crate goes to stderr - a
//! stray print on stdout would corrupt the protocol stream.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve one MCP session over stdin/stdout, blocking until the peer
    /// disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Serving MCP over stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("stdio session closed");
        Ok(())
    }
}
