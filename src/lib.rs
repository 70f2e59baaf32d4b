//! Alpha Vantage MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing the
//! Alpha Vantage market data API as tools and guided prompts.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   transports, and the main server handler
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the static operation catalog plus the dispatch path that
//!     validates arguments, builds upstream queries, and fetches results
//!   - **prompts**: guided prompts derived from the tool catalog
//!
//! Every endpoint is one static descriptor in the catalog; a single
//! validate/default/fetch path serves all of them.
//!
//! # Example
//!
//! ```rust,no_run
//! use alphavantage_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
