//! End-to-end dispatch tests against a mock upstream endpoint.

use rmcp::model::JsonObject;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use alphavantage_mcp_server::core::config::ApiConfig;
use alphavantage_mcp_server::domains::tools::{ToolError, ToolRegistry};

fn args(value: Value) -> JsonObject {
    value.as_object().cloned().unwrap()
}

fn registry_for(server: &MockServer) -> ToolRegistry {
    ToolRegistry::new(&ApiConfig {
        api_key: "test_key".to_string(),
        base_url: format!("{}/query", server.uri()),
    })
}

#[tokio::test]
async fn stock_quote_sends_exact_query_and_returns_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "GLOBAL_QUOTE"))
        .and(query_param("symbol", "IBM"))
        .and(query_param("datatype", "json"))
        .and(query_param("apikey", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Global Quote": { "01. symbol": "IBM", "05. price": "238.5000" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let result = registry
        .invoke("stock_quote", &args(json!({ "symbol": "IBM" })))
        .await
        .unwrap();

    // JSON responses are pretty-printed for the client.
    assert!(result.contains("Global Quote"));
    assert!(result.contains("238.5000"));
}

#[tokio::test]
async fn csv_datatype_passes_body_through_unmodified() {
    let server = MockServer::start().await;

    let body = "symbol,open,high,low,price\nIBM,237.0,239.1,236.2,238.5\n";
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("datatype", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let result = registry
        .invoke("stock_quote", &args(json!({ "symbol": "IBM", "datatype": "csv" })))
        .await
        .unwrap();

    assert_eq!(result, body);
}

#[tokio::test]
async fn calendar_endpoint_is_text_without_datatype() {
    let server = MockServer::start().await;

    let body = "symbol,name,ipoDate\nACME,Acme Corp,2026-09-15\n";
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "IPO_CALENDAR"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let result = registry.invoke("ipo_calendar", &args(json!({}))).await.unwrap();

    assert_eq!(result, body);
}

#[tokio::test]
async fn upstream_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let err = registry
        .invoke("stock_quote", &args(json!({ "symbol": "IBM" })))
        .await
        .unwrap_err();

    match err {
        ToolError::UpstreamStatus { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("upstream exploded"));
        }
        other => panic!("expected UpstreamStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn oversized_multibyte_error_body_is_truncated_cleanly() {
    let server = MockServer::start().await;

    // 511 ASCII bytes followed by a two-byte character straddling the
    // truncation limit, then more text.
    let mut body = "a".repeat(511);
    body.push('é');
    body.push_str(&"b".repeat(100));

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let err = registry
        .invoke("stock_quote", &args(json!({ "symbol": "IBM" })))
        .await
        .unwrap_err();

    match err {
        ToolError::UpstreamStatus { status, message } => {
            assert_eq!(status, 500);
            assert!(message.len() <= 512);
            assert!(message.starts_with("aaa"));
        }
        other => panic!("expected UpstreamStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_arguments_never_reach_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let registry = registry_for(&server);

    let err = registry
        .invoke("fx_intraday", &args(json!({ "from_symbol": "EUR" })))
        .await
        .unwrap_err();
    match err {
        ToolError::MissingArguments(names) => {
            assert_eq!(names, vec!["to_symbol".to_string(), "interval".to_string()]);
        }
        other => panic!("expected MissingArguments, got {other:?}"),
    }

    let err = registry
        .invoke("no_such_tool", &JsonObject::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(_)));
}

#[tokio::test]
async fn symbol_lists_are_capped_before_dispatch() {
    let server = MockServer::start().await;

    let symbols: Vec<String> = (0..150).map(|i| format!("S{i}")).collect();
    let expected_joined = symbols[..100].join(",");

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "REALTIME_BULK_QUOTES"))
        .and(query_param("symbols", expected_joined.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    registry
        .invoke("realtime_bulk_quotes", &args(json!({ "symbols": symbols })))
        .await
        .unwrap();
}
