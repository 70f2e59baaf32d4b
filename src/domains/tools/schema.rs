//! Operation descriptors - the static schema driving the whole tool surface.
//!
//! Every Alpha Vantage endpoint is described by one [`ToolDef`]: tool name,
//! upstream `function` constant, parameter specs, and response shape. The
//! registry lists tools from this table, the dispatcher validates and builds
//! queries from it, and the prompt registry derives its argument lists from
//! it. There is exactly one code path per invocation; the ~130 endpoints
//! differ only in data.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

/// Semantic type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Str,
    Int,
    Float,
    Bool,
    /// List of strings, comma-joined into a single query value.
    List,
    /// List of ticker symbols, comma-joined and capped at the upstream
    /// limit of 100 entries.
    SymbolList,
}

impl ParamKind {
    /// JSON Schema type name advertised to clients.
    pub fn schema_type(self) -> &'static str {
        match self {
            ParamKind::Str => "string",
            ParamKind::Int | ParamKind::Float => "number",
            ParamKind::Bool => "boolean",
            ParamKind::List | ParamKind::SymbolList => "array",
        }
    }

    /// Whether values of this kind are arrays at the protocol boundary.
    pub fn is_list(self) -> bool {
        matches!(self, ParamKind::List | ParamKind::SymbolList)
    }
}

/// Declared spec for a single tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    /// Substituted into the query when the caller omits the parameter.
    /// `None` means the parameter is simply left out of the request.
    pub default: Option<&'static str>,
    /// Upstream query key when it differs from the parameter name.
    query_name: Option<&'static str>,
}

impl ParamSpec {
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            query_name: None,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            query_name: None,
        }
    }

    pub const fn with_default(name: &'static str, kind: ParamKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: Some(default),
            query_name: None,
        }
    }

    /// Override the upstream query key (e.g. the analytics endpoints take
    /// uppercase keys like `SYMBOLS` and `RANGE`).
    pub const fn upstream(mut self, query_name: &'static str) -> Self {
        self.query_name = Some(query_name);
        self
    }

    /// Key used in the upstream query string.
    pub fn query_key(&self) -> &'static str {
        self.query_name.unwrap_or(self.name)
    }
}

/// How the upstream response body is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Always decoded as JSON.
    Json,
    /// Always returned as raw delimited text (the calendar endpoints).
    Csv,
    /// Decided per call: raw text when the caller passes `datatype=csv`.
    ByDatatype,
}

/// Static descriptor for one tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    /// Upstream `function` selector constant.
    pub function: &'static str,
    pub params: &'static [ParamSpec],
    pub response: ResponseKind,
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl ToolDef {
    /// Descriptor for a JSON endpoint. If the parameter list declares a
    /// `datatype` switch, the response shape is decided per call.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        function: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        let mut i = 0;
        let mut by_datatype = false;
        while i < params.len() {
            if str_eq(params[i].name, "datatype") {
                by_datatype = true;
            }
            i += 1;
        }
        Self {
            name,
            description,
            function,
            params,
            response: if by_datatype {
                ResponseKind::ByDatatype
            } else {
                ResponseKind::Json
            },
        }
    }

    /// Descriptor for an endpoint that only serves delimited text.
    pub const fn csv(
        name: &'static str,
        description: &'static str,
        function: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            description,
            function,
            params,
            response: ResponseKind::Csv,
        }
    }

    /// Look up a parameter spec by name.
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Build the JSON Schema object advertised to clients.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        let mut properties = JsonObject::new();
        for p in self.params {
            let mut schema = JsonObject::new();
            schema.insert("type".to_string(), json!(p.kind.schema_type()));
            if p.kind.is_list() {
                schema.insert("items".to_string(), json!({ "type": "string" }));
            }
            properties.insert(p.name.to_string(), Value::Object(schema));
        }

        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| json!(p.name))
            .collect();

        let mut root = JsonObject::new();
        root.insert("type".to_string(), json!("object"));
        root.insert("properties".to_string(), Value::Object(properties));
        root.insert("required".to_string(), Value::Array(required));
        Arc::new(root)
    }

    /// Create the rmcp Tool model for this descriptor.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
