//! Search client: the boundary to the external resume-search service.
//!
//! The service ranks resumes and writes the agent answer; this crate only
//! forwards the query and hands the `SearchResult` to the results panel.
//! `AppState` carries an `Arc<dyn SearchBackend>` so handlers can be tested
//! without a network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::search::SearchResult;

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Gave up after {retries} retries")]
    Exhausted { retries: u32 },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchApiError {
    #[serde(alias = "error", alias = "message")]
    detail: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Anything that can answer a free-text resume query.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResult, AppError>;
}

/// Used when no `SEARCH_API_URL` is configured.
pub struct UnconfiguredSearchBackend;

#[async_trait]
impl SearchBackend for UnconfiguredSearchBackend {
    async fn search(&self, _query: &str) -> Result<SearchResult, AppError> {
        Err(AppError::SearchUnavailable)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP backend
// ────────────────────────────────────────────────────────────────────────────

/// Posts `{"query": ...}` to the search service and decodes a `SearchResult`.
/// Retries on 429 and 5xx with exponential backoff.
#[derive(Clone)]
pub struct HttpSearchBackend {
    client: Client,
    endpoint: String,
}

impl HttpSearchBackend {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn call(&self, query: &str) -> Result<SearchResult, SearchError> {
        let request_body = SearchRequest { query };
        let mut last_error: Option<SearchError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                warn!(
                    "Search call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&self.endpoint)
                .json(&request_body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(SearchError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if is_retryable(status) {
                let body = response.text().await.unwrap_or_default();
                warn!("Search API returned {}: {}", status, body);
                last_error = Some(SearchError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SearchError::Api {
                    status: status.as_u16(),
                    message: error_message(&body),
                });
            }

            let result: SearchResult = response.json().await?;
            debug!(
                agent = %result.agent_used,
                previews = result.previews().len(),
                "Search call succeeded"
            );
            return Ok(result);
        }

        Err(last_error.unwrap_or(SearchError::Exhausted {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &str) -> Result<SearchResult, AppError> {
        Ok(self.call(query).await?)
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// 1s, 2s, 4s, ... for attempt 1, 2, 3, ...
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(1000 * (1 << (attempt.saturating_sub(1))))
}

/// Pulls `detail` / `error` / `message` out of a JSON error body, else returns the body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<SearchApiError>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| body.to_string())
}
