//! HTTP summarizer — calls a Hugging Face Inference-style summarization endpoint
//!
//! Request: `POST {base_url}/models/{model}` with
//! `{"inputs": ..., "parameters": {"max_length", "min_length", "do_sample"}}`.
//! Response: `[{"summary_text": "..."}]`, or `{"error": "..."}` on failure.

use super::traits::{ensure_text, SummarizeOptions, Summarizer, SummarizerError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_REVISION: &str = "a4f8f3e";

/// Connection settings for [`HttpSummarizer`]
#[derive(Debug, Clone)]
pub struct HttpSummarizerConfig {
    pub base_url: String,
    pub model: String,
    /// Model revision pinned by the caller; sent as the `revision` query parameter
    pub revision: Option<String>,
    /// Bearer token; requests go out unauthenticated without one
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl Default for HttpSummarizerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            revision: Some(DEFAULT_REVISION.to_string()),
            api_token: None,
            timeout: Duration::from_secs(60),
        }
    }
}

// ============================================================================
// Wire structs
// ============================================================================

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
    parameters: SummarizeParameters,
    options: RequestOptions,
}

#[derive(Debug, Serialize)]
struct SummarizeParameters {
    max_length: usize,
    min_length: usize,
    do_sample: bool,
}

#[derive(Debug, Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn build_request<'a>(text: &'a str, options: &SummarizeOptions) -> SummarizeRequest<'a> {
    SummarizeRequest {
        inputs: text,
        parameters: SummarizeParameters {
            max_length: options.max_length,
            min_length: options.min_length,
            do_sample: !options.deterministic,
        },
        options: RequestOptions {
            wait_for_model: true,
        },
    }
}

/// Turn an HTTP status and body into a summary or a failure message.
fn parse_response(status: u16, body: &str) -> Result<String, SummarizerError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(SummarizerError::Failed(format!("HTTP {status}: {message}")));
    }

    if let Ok(err) = serde_json::from_str::<ErrorBody>(body) {
        return Err(SummarizerError::Failed(err.error));
    }

    let items: Vec<SummaryItem> = serde_json::from_str(body)
        .map_err(|e| SummarizerError::Failed(format!("malformed response: {e}")))?;

    items
        .into_iter()
        .next()
        .map(|item| item.summary_text.trim().to_string())
        .ok_or_else(|| SummarizerError::Failed("response contained no summary".to_string()))
}

// ============================================================================
// HttpSummarizer
// ============================================================================

/// Summarizer backed by a remote inference endpoint.
#[derive(Debug, Clone)]
pub struct HttpSummarizer {
    client: Client,
    config: HttpSummarizerConfig,
}

impl HttpSummarizer {
    pub fn new(config: HttpSummarizerConfig) -> Result<Self, SummarizerError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SummarizerError::Failed(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummarizeOptions,
    ) -> Result<String, SummarizerError> {
        let text = ensure_text(text)?;
        let url = self.endpoint();
        tracing::debug!(%url, chars = text.len(), "requesting summary");

        let mut request = self.client.post(&url).json(&build_request(text, options));
        if let Some(revision) = &self.config.revision {
            request = request.query(&[("revision", revision)]);
        }
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SummarizerError::Failed(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SummarizerError::Failed(e.to_string()))?;

        parse_response(status, &body)
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_bounds_and_greedy_flag() {
        let options = SummarizeOptions::default();
        let json = serde_json::to_value(build_request("some text", &options)).unwrap();

        assert_eq!(json["inputs"], "some text");
        assert_eq!(json["parameters"]["max_length"], 50);
        assert_eq!(json["parameters"]["min_length"], 25);
        assert_eq!(json["parameters"]["do_sample"], false);
        assert_eq!(json["options"]["wait_for_model"], true);
    }

    #[test]
    fn sampled_decoding_sets_do_sample() {
        let options = SummarizeOptions {
            deterministic: false,
            ..SummarizeOptions::default()
        };
        let json = serde_json::to_value(build_request("x", &options)).unwrap();
        assert_eq!(json["parameters"]["do_sample"], true);
    }

    #[test]
    fn parses_first_summary() {
        let body = r#"[{"summary_text": " The cat sat. "}, {"summary_text": "ignored"}]"#;
        assert_eq!(parse_response(200, body), Ok("The cat sat.".to_string()));
    }

    #[test]
    fn error_status_keeps_remote_message() {
        let body = r#"{"error": "Model is overloaded"}"#;
        let err = parse_response(503, body).unwrap_err();
        assert_eq!(
            err,
            SummarizerError::Failed("HTTP 503: Model is overloaded".to_string())
        );
    }

    #[test]
    fn error_status_with_plain_body() {
        let err = parse_response(401, "Unauthorized\n").unwrap_err();
        assert_eq!(err, SummarizerError::Failed("HTTP 401: Unauthorized".to_string()));
    }

    #[test]
    fn error_body_on_success_status_is_a_failure() {
        let err = parse_response(200, r#"{"error": "input too short"}"#).unwrap_err();
        assert_eq!(err, SummarizerError::Failed("input too short".to_string()));
    }

    #[test]
    fn empty_or_malformed_response_is_a_failure() {
        assert!(matches!(parse_response(200, "[]"), Err(SummarizerError::Failed(_))));
        assert!(matches!(parse_response(200, "not json"), Err(SummarizerError::Failed(_))));
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let summarizer = HttpSummarizer::new(HttpSummarizerConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..HttpSummarizerConfig::default()
        })
        .unwrap();
        assert_eq!(
            summarizer.endpoint(),
            "http://localhost:8080/models/sshleifer/distilbart-cnn-12-6"
        );
        assert_eq!(summarizer.name(), DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn blank_text_fails_before_any_request() {
        // Unroutable base URL: reaching the network would produce Failed instead.
        let summarizer = HttpSummarizer::new(HttpSummarizerConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..HttpSummarizerConfig::default()
        })
        .unwrap();

        let err = summarizer
            .summarize("   ", &SummarizeOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err, SummarizerError::InvalidInput);
    }
}
