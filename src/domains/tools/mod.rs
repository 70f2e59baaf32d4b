//! Tool domain: the Alpha Vantage operation catalog and its dispatch path.
//!
//! Data-driven by design: every endpoint is one [`schema::ToolDef`] entry
//! in [`catalog`], and the registry, dispatcher, and client together form
//! the single code path that serves all of them.

pub mod catalog;
pub mod client;
pub mod dispatcher;
pub mod error;
pub mod registry;
pub mod schema;

pub use client::{ApiClient, Payload};
pub use dispatcher::MAX_SYMBOLS;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use schema::{ParamKind, ParamSpec, ResponseKind, ToolDef};
