//! Tool registry: name lookup plus the single invocation path.

use std::collections::HashMap;

use rmcp::model::{JsonObject, Tool};
use tracing::{debug, info};

use super::catalog;
use super::client::{ApiClient, Payload};
use super::dispatcher::{build_query, wants_text};
use super::error::ToolError;
use super::schema::ToolDef;
use crate::core::config::ApiConfig;

/// Registry of every advertised tool, paired with the outbound client.
///
/// Listing, lookup, and invocation all read from the same static catalog,
/// so the advertised surface and the dispatchable surface cannot drift
/// apart.
pub struct ToolRegistry {
    defs: HashMap<&'static str, &'static ToolDef>,
    client: ApiClient,
}

impl ToolRegistry {
    /// Build the registry from the static catalog.
    pub fn new(config: &ApiConfig) -> Self {
        let defs: HashMap<_, _> = catalog::all().map(|def| (def.name, def)).collect();
        info!(tools = defs.len(), "tool registry initialized");
        Self {
            defs,
            client: ApiClient::new(config),
        }
    }

    /// Look up a descriptor by tool name.
    pub fn get(&self, name: &str) -> Option<&'static ToolDef> {
        self.defs.get(name).copied()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Protocol models for every tool, in stable name order.
    pub fn list_tools(&self) -> Vec<Tool> {
        let mut defs: Vec<_> = self.defs.values().collect();
        defs.sort_by_key(|def| def.name);
        defs.into_iter().map(|def| def.to_tool()).collect()
    }

    /// Validate, fetch, and render one tool invocation.
    ///
    /// Unknown names and argument errors fail before any network traffic.
    /// JSON payloads are pretty-printed; delimited text passes through
    /// byte for byte.
    pub async fn invoke(&self, name: &str, args: &JsonObject) -> Result<String, ToolError> {
        let def = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let query = build_query(def, args)?;
        debug!(tool = name, function = def.function, "dispatching");

        let payload = self.client.fetch(&query, wants_text(def, &query)).await?;
        match payload {
            Payload::Json(value) => serde_json::to_string_pretty(&value)
                .map_err(|e| ToolError::Decode(e.to_string())),
            Payload::Text(text) => Ok(text),
        }
    }
}
