//! Dispatch helpers: argument validation, defaulting, and query building.
//!
//! These functions are pure over a [`ToolDef`] and an argument bag, so the
//! whole validation path is testable without touching the network.

use rmcp::model::JsonObject;
use serde_json::Value;

use super::error::ToolError;
use super::schema::{ParamKind, ParamSpec, ResponseKind, ToolDef};

/// Documented upstream cap on comma-joined symbol lists.
pub const MAX_SYMBOLS: usize = 100;

/// Build the flat upstream query for one invocation.
///
/// Checks every required parameter first and reports all missing names in
/// one error, then applies declared defaults for omitted optionals and
/// normalizes values into query strings. Parameters that are absent with
/// no default are omitted from the query entirely. Only declared
/// parameters are forwarded, so a caller-supplied `apikey` never reaches
/// the upstream request.
pub fn build_query(def: &ToolDef, args: &JsonObject) -> Result<Vec<(String, String)>, ToolError> {
    let missing: Vec<String> = def
        .params
        .iter()
        .filter(|p| p.required && args.get(p.name).is_none_or(is_empty))
        .map(|p| p.name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ToolError::MissingArguments(missing));
    }

    let mut query = vec![("function".to_string(), def.function.to_string())];
    for p in def.params {
        let value = match args.get(p.name) {
            Some(v) if !v.is_null() => Some(normalize(p, v)?),
            _ => p.default.map(str::to_string),
        };
        if let Some(v) = value {
            query.push((p.query_key().to_string(), v));
        }
    }
    Ok(query)
}

/// Whether the upstream response should be returned as raw text.
pub fn wants_text(def: &ToolDef, query: &[(String, String)]) -> bool {
    match def.response {
        ResponseKind::Csv => true,
        ResponseKind::Json => false,
        ResponseKind::ByDatatype => query.iter().any(|(k, v)| k == "datatype" && v == "csv"),
    }
}

/// Missing-or-empty check used for required parameters.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

/// Normalize one argument value into its upstream query string.
fn normalize(spec: &ParamSpec, value: &Value) -> Result<String, ToolError> {
    match spec.kind {
        ParamKind::Str => scalar_string(spec, value),
        ParamKind::Int | ParamKind::Float => match value {
            Value::Number(n) => Ok(n.to_string()),
            // Lenient: numeric strings pass through as-is.
            Value::String(s) => Ok(s.clone()),
            _ => Err(ToolError::invalid_argument(spec.name, "expected a number")),
        },
        ParamKind::Bool => match value {
            Value::Bool(b) => Ok(b.to_string()),
            Value::String(s) => Ok(s.clone()),
            _ => Err(ToolError::invalid_argument(spec.name, "expected a boolean")),
        },
        ParamKind::List => join_list(spec, value, usize::MAX),
        ParamKind::SymbolList => join_list(spec, value, MAX_SYMBOLS),
    }
}

fn scalar_string(spec: &ParamSpec, value: &Value) -> Result<String, ToolError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ToolError::invalid_argument(spec.name, "expected a string")),
    }
}

/// Comma-join a list value, truncating to `cap` entries. A plain string is
/// accepted as a pre-joined list.
fn join_list(spec: &ParamSpec, value: &Value, cap: usize) -> Result<String, ToolError> {
    match value {
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len().min(cap));
            for item in items.iter().take(cap) {
                match item {
                    Value::String(s) => parts.push(s.as_str()),
                    _ => {
                        return Err(ToolError::invalid_argument(
                            spec.name,
                            "expected an array of strings",
                        ));
                    }
                }
            }
            Ok(parts.join(","))
        }
        Value::String(s) => Ok(s.clone()),
        _ => Err(ToolError::invalid_argument(spec.name, "expected an array")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::catalog;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn lookup(name: &str) -> &'static ToolDef {
        catalog::all()
            .find(|d| d.name == name)
            .unwrap_or_else(|| panic!("no tool named {name}"))
    }

    #[test]
    fn test_quote_query_exact_contents() {
        let def = lookup("stock_quote");
        let query = build_query(def, &args(json!({ "symbol": "IBM" }))).unwrap();
        assert_eq!(
            query,
            vec![
                ("function".to_string(), "GLOBAL_QUOTE".to_string()),
                ("symbol".to_string(), "IBM".to_string()),
                ("datatype".to_string(), "json".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_required_names_every_parameter() {
        let def = lookup("fx_intraday");
        let err = build_query(def, &args(json!({ "from_symbol": "EUR" }))).unwrap_err();
        match err {
            ToolError::MissingArguments(names) => {
                assert_eq!(names, vec!["to_symbol".to_string(), "interval".to_string()]);
            }
            other => panic!("expected MissingArguments, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let def = lookup("stock_quote");
        let err = build_query(def, &args(json!({ "symbol": "" }))).unwrap_err();
        assert!(matches!(err, ToolError::MissingArguments(_)));
    }

    #[test]
    fn test_defaults_applied_for_omitted_optionals() {
        let def = lookup("time_series_daily");
        let query = build_query(def, &args(json!({ "symbol": "TSCO.LON" }))).unwrap();
        assert!(query.contains(&("outputsize".to_string(), "compact".to_string())));
        assert!(query.contains(&("datatype".to_string(), "json".to_string())));
    }

    #[test]
    fn test_optionals_without_default_are_omitted() {
        let def = lookup("sma");
        let query = build_query(
            def,
            &args(json!({
                "symbol": "IBM",
                "interval": "weekly",
                "time_period": 10,
                "series_type": "open"
            })),
        )
        .unwrap();
        assert!(!query.iter().any(|(k, _)| k == "month"));
        assert!(query.contains(&("time_period".to_string(), "10".to_string())));
    }

    #[test]
    fn test_symbol_list_capped_at_100() {
        let def = lookup("realtime_bulk_quotes");
        let symbols: Vec<String> = (0..150).map(|i| format!("S{i}")).collect();
        let query = build_query(def, &args(json!({ "symbols": symbols }))).unwrap();
        let joined = &query.iter().find(|(k, _)| k == "symbols").unwrap().1;
        assert_eq!(joined.split(',').count(), 100);
        assert!(joined.starts_with("S0,"));
        assert!(joined.ends_with(",S99"));
    }

    #[test]
    fn test_bool_and_number_normalization() {
        let def = lookup("time_series_intraday");
        let query = build_query(
            def,
            &args(json!({ "symbol": "IBM", "interval": "5min", "adjusted": false })),
        )
        .unwrap();
        assert!(query.contains(&("adjusted".to_string(), "false".to_string())));
        // Omitted bool falls back to its declared default.
        assert!(query.contains(&("extended_hours".to_string(), "true".to_string())));
    }

    #[test]
    fn test_caller_supplied_apikey_is_dropped() {
        let def = lookup("stock_quote");
        let query = build_query(def, &args(json!({ "symbol": "IBM", "apikey": "evil" }))).unwrap();
        assert!(!query.iter().any(|(k, _)| k == "apikey"));
    }

    #[test]
    fn test_no_extraneous_keys() {
        let def = lookup("company_overview");
        let query =
            build_query(def, &args(json!({ "symbol": "IBM", "bogus": "value" }))).unwrap();
        assert_eq!(
            query,
            vec![
                ("function".to_string(), "OVERVIEW".to_string()),
                ("symbol".to_string(), "IBM".to_string()),
            ]
        );
    }

    #[test]
    fn test_analytics_upstream_keys() {
        let def = lookup("analytics_fixed_window");
        let query = build_query(
            def,
            &args(json!({
                "symbols": ["AAPL", "MSFT"],
                "series_range": "2month",
                "interval": "DAILY",
                "calculations": ["MEAN", "STDDEV"]
            })),
        )
        .unwrap();
        assert!(query.contains(&("SYMBOLS".to_string(), "AAPL,MSFT".to_string())));
        assert!(query.contains(&("RANGE".to_string(), "2month".to_string())));
        assert!(query.contains(&("CALCULATIONS".to_string(), "MEAN,STDDEV".to_string())));
        assert!(query.contains(&("OHLC".to_string(), "close".to_string())));
    }

    #[test]
    fn test_wants_text_by_datatype() {
        let def = lookup("stock_quote");
        let json_query = build_query(def, &args(json!({ "symbol": "IBM" }))).unwrap();
        assert!(!wants_text(def, &json_query));

        let csv_query =
            build_query(def, &args(json!({ "symbol": "IBM", "datatype": "csv" }))).unwrap();
        assert!(wants_text(def, &csv_query));
    }

    #[test]
    fn test_calendar_endpoints_always_text() {
        let def = lookup("ipo_calendar");
        let query = build_query(def, &args(json!({}))).unwrap();
        assert!(wants_text(def, &query));
    }
}
