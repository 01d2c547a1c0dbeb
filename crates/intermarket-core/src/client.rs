//! Typed access to the three dashboard endpoints.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::http_client::{HttpClient, HttpError, HttpRequest};
use crate::schema::{HistoryRow, MarketDataResponse, OverviewResponse};

pub const MARKET_DATA_PATH: &str = "/api/market-data";
pub const HISTORY_PATH: &str = "/api/history";
pub const OVERVIEW_PATH: &str = "/api/overview";

/// Fetch-layer error categories: transport failures and non-2xx answers
/// are fetch failures, an undecodable body is a malformed payload.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("endpoint '{path}' returned HTTP {status}")]
    Status { path: &'static str, status: u16 },

    #[error("endpoint '{path}' returned an undecodable payload: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client for the dashboard backend. No caching, no retries; every
/// call goes to the wire.
#[derive(Clone)]
pub struct DashboardClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl DashboardClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            timeout_ms: 3_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub async fn market_data(&self) -> Result<MarketDataResponse, ClientError> {
        self.fetch(MARKET_DATA_PATH).await
    }

    pub async fn history(&self) -> Result<Vec<HistoryRow>, ClientError> {
        self.fetch(HISTORY_PATH).await
    }

    pub async fn overview(&self) -> Result<OverviewResponse, ClientError> {
        self.fetch(OVERVIEW_PATH).await
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, ClientError> {
        let request = HttpRequest::get(format!("{}{path}", self.base_url))
            .with_timeout_ms(self.timeout_ms);
        let response = self.http.execute(request).await?;

        if !response.is_success() {
            return Err(ClientError::Status {
                path,
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|source| ClientError::Decode { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::StaticHttpClient;

    fn client(transport: StaticHttpClient) -> DashboardClient {
        DashboardClient::new(Arc::new(transport), "http://test.local/")
    }

    #[tokio::test]
    async fn decodes_market_data_payload() {
        let transport = StaticHttpClient::new().with_route(
            MARKET_DATA_PATH,
            r#"{"sentiment":"bullish","score":2.4,"latest":{"SP500":4500.5}}"#,
        );

        let payload = client(transport).market_data().await.expect("must fetch");

        assert_eq!(payload.sentiment, "bullish");
        assert_eq!(payload.latest.get("SP500"), Some(&Some(4500.5)));
    }

    #[tokio::test]
    async fn non_success_status_is_a_fetch_failure() {
        let err = client(StaticHttpClient::new())
            .overview()
            .await
            .expect_err("must fail");

        assert!(matches!(
            err,
            ClientError::Status {
                path: OVERVIEW_PATH,
                status: 404
            }
        ));
    }

    #[tokio::test]
    async fn undecodable_body_is_a_malformed_payload() {
        let transport = StaticHttpClient::new().with_route(HISTORY_PATH, "not json");

        let err = client(transport).history().await.expect_err("must fail");

        assert!(matches!(err, ClientError::Decode { path: HISTORY_PATH, .. }));
    }
}
