//! Transport seam between the dashboard and its backend API.
//!
//! The dashboard only ever issues GETs against three fixed paths, so the
//! request envelope is deliberately small. Production goes through
//! reqwest; tests swap in [`StaticHttpClient`] for deterministic offline
//! responses.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

/// Transport-level fetch error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// GET request envelope for the dashboard endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub timeout_ms: u64,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: 3_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// HTTP response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

pub type HttpFuture<'a> = Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;

/// Transport contract the typed client talks through.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a>;
}

/// Production transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: Arc::new(
                reqwest::Client::builder()
                    .user_agent("intermarket/0.1.0")
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new()),
            ),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a> {
        Box::pin(async move {
            let response = self
                .client
                .get(&request.url)
                .timeout(std::time::Duration::from_millis(request.timeout_ms))
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        HttpError::new(format!("request timeout: {e}"))
                    } else if e.is_connect() {
                        HttpError::new(format!("connection failed: {e}"))
                    } else {
                        HttpError::new(format!("request failed: {e}"))
                    }
                })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| HttpError::new(format!("failed to read response body: {e}")))?;

            Ok(HttpResponse { status, body })
        })
    }
}

/// Canned-response transport for deterministic offline tests. Routes are
/// matched by path suffix; anything unrouted answers 404.
#[derive(Debug, Default)]
pub struct StaticHttpClient {
    routes: Vec<(String, String)>,
}

impl StaticHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.routes.push((path.into(), body.into()));
        self
    }
}

impl HttpClient for StaticHttpClient {
    fn execute<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a> {
        let matched = self
            .routes
            .iter()
            .find(|(path, _)| request.url.ends_with(path.as_str()))
            .map(|(_, body)| body.clone());

        Box::pin(async move {
            match matched {
                Some(body) => Ok(HttpResponse::ok_json(body)),
                None => Ok(HttpResponse {
                    status: 404,
                    body: String::from("not found"),
                }),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_client_serves_routed_bodies() {
        let client = StaticHttpClient::new().with_route("/api/history", "[]");

        let response = client
            .execute(HttpRequest::get("http://test.local/api/history"))
            .await
            .expect("must respond");

        assert!(response.is_success());
        assert_eq!(response.body, "[]");
    }

    #[tokio::test]
    async fn static_client_answers_404_for_unknown_paths() {
        let client = StaticHttpClient::new();

        let response = client
            .execute(HttpRequest::get("http://test.local/api/overview"))
            .await
            .expect("must respond");

        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }

    #[test]
    fn request_builder_sets_timeout() {
        let request = HttpRequest::get("http://test.local/api/overview").with_timeout_ms(500);
        assert_eq!(request.timeout_ms, 500);
    }
}
