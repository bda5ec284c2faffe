use std::time::Duration;

use futures_util::StreamExt;
use landing_logging::{landing_debug, SEARCH_TARGET};
use reqwest::Url;
use serde_json::Value;

use crate::{EngineError, FailureKind, SearchError};

/// Search endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/search";

#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Endpoint URL without a query; the canonical query string is appended.
    pub endpoint: String,
    /// `None` leaves timing to the transport defaults.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl SearchSettings {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: None,
            max_response_bytes: 2 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    /// Runs one search with an already-encoded query string.
    async fn search(&self, query: &str) -> Result<Vec<Value>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchClient {
    settings: SearchSettings,
    client: reqwest::Client,
}

impl ReqwestSearchClient {
    pub fn new(settings: SearchSettings) -> Result<Self, EngineError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| EngineError::Client(err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn request_url(&self, query: &str) -> Result<Url, SearchError> {
        let mut url = Url::parse(&self.settings.endpoint)
            .map_err(|err| SearchError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        url.set_query(if query.is_empty() { None } else { Some(query) });
        Ok(url)
    }
}

#[async_trait::async_trait]
impl SearchClient for ReqwestSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<Value>, SearchError> {
        let url = self.request_url(query)?;
        landing_debug!(target: SEARCH_TARGET, "GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }

        parse_results(&body)
    }
}

/// Parses a success body, which must be a JSON array of records.
pub fn parse_results(body: &[u8]) -> Result<Vec<Value>, SearchError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Err(SearchError::new(
            FailureKind::MalformedBody,
            format!("expected a list of results, got {}", json_kind(&other)),
        )),
        Err(err) => Err(SearchError::new(
            FailureKind::MalformedBody,
            err.to_string(),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return SearchError::new(FailureKind::MalformedBody, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
