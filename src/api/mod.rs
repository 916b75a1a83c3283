// src/api/mod.rs
pub mod auth;
pub mod keys;
pub mod upload;
pub mod videos;

use crate::config::ClientConfig;
use crate::error::ApiError;
use metrics::{describe_counter, describe_gauge};
use once_cell::sync::OnceCell;
use std::time::Duration;

/// One-time metrics registration (so series show up wherever the host
/// application exports them).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("poll_runs_total", "Listing fetches issued by poll sessions.");
        describe_counter!(
            "poll_fetch_errors_total",
            "Listing fetches that failed (transport, HTTP status, or decode)."
        );
        describe_counter!(
            "poll_sessions_stopped_total",
            "Poll sessions that reached the stopped state."
        );
        describe_counter!("uploads_total", "Upload requests issued.");
        describe_gauge!(
            "videos_processing",
            "Videos in a transient state in the last committed snapshot."
        );
    });
}

/// HTTP client for the Streamify API. Cheap to clone; all sub-clients
/// (listing, upload, auth, keys) hang off this one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(cfg: &ClientConfig) -> Self {
        ensure_metrics_described();
        Self {
            http: reqwest::Client::new(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            timeout: cfg.request_timeout(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .timeout(self.timeout)
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http
            .post(format!("{}{}", self.base_url, path))
            .timeout(self.timeout)
    }

    pub(crate) fn post_authed(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub(crate) fn delete(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.http
            .delete(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .timeout(self.timeout)
    }
}

/// Turn a non-2xx response into `ApiError::Status`, passing the error body
/// through verbatim (the server answers with plain text or JSON depending on
/// the endpoint).
pub(crate) async fn status_error(rsp: reqwest::Response) -> ApiError {
    let code = rsp.status().as_u16();
    let body = rsp.text().await.unwrap_or_default();
    ApiError::Status { code, body }
}
