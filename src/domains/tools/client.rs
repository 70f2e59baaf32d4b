//! Resource fetcher - the single outbound HTTP path to the upstream API.
//!
//! Every tool invocation funnels through [`ApiClient::fetch`]: one GET
//! against the configured query endpoint with the normalized parameters
//! plus the injected credential. No retries, no caching; failures surface
//! verbatim with their status or cause.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::error::ToolError;
use crate::core::config::ApiConfig;

/// Upper bound on error-body text carried into an error message.
const ERROR_BODY_LIMIT: usize = 512;

/// A decoded upstream response.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Structured JSON response.
    Json(Value),
    /// Raw delimited text (csv), passed through unmodified.
    Text(String),
}

/// HTTP client bound to one base URL and credential.
///
/// The credential is appended here and only here; callers cannot override
/// it through the argument bag.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Create a client from the process-wide API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Issue one GET with the given flat query pairs.
    ///
    /// When `expect_text` is set the body is returned untouched; otherwise
    /// it is decoded as JSON. Non-2xx statuses and transport errors are
    /// surfaced as distinct fetch failures, never retried or swallowed.
    pub async fn fetch(
        &self,
        query: &[(String, String)],
        expect_text: bool,
    ) -> Result<Payload, ToolError> {
        debug!(url = %self.base_url, params = query.len(), "upstream GET");

        let response = self
            .http
            .get(&self.base_url)
            .query(query)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ToolError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ToolError::UpstreamStatus {
                status: status.as_u16(),
                message: truncate_body(body),
            });
        }

        if expect_text {
            let text = response
                .text()
                .await
                .map_err(|e| ToolError::Transport(e.to_string()))?;
            Ok(Payload::Text(text))
        } else {
            let value = response
                .json::<Value>()
                .await
                .map_err(|e| ToolError::Decode(e.to_string()))?;
            Ok(Payload::Json(value))
        }
    }
}

/// Cap an error body at [`ERROR_BODY_LIMIT`] bytes without splitting a
/// UTF-8 character.
fn truncate_body(mut body: String) -> String {
    if body.len() > ERROR_BODY_LIMIT {
        let mut end = ERROR_BODY_LIMIT;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_untouched() {
        assert_eq!(truncate_body("rate limited".to_string()), "rate limited");
    }

    #[test]
    fn test_long_body_capped_at_limit() {
        let body = "x".repeat(2 * ERROR_BODY_LIMIT);
        assert_eq!(truncate_body(body).len(), ERROR_BODY_LIMIT);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // A two-byte character straddling the limit must be dropped whole.
        let mut body = "x".repeat(ERROR_BODY_LIMIT - 1);
        body.push('é');
        body.push_str("tail");

        let truncated = truncate_body(body);
        assert_eq!(truncated.len(), ERROR_BODY_LIMIT - 1);
        assert!(truncated.chars().all(|c| c == 'x'));
    }
}
