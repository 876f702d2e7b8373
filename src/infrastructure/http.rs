use gloo_net::http::{Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::config;
use crate::domain::{
    errors::{FetchError, FetchResult},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::{Snapshot, SnapshotRepository},
};

/// One JSON request/response round trip.
///
/// Transport failures, non-2xx statuses and undecodable bodies are logged here
/// and handed back as [`FetchError`]; nothing is retried.
pub async fn call_api<T, B>(url: &str, method: Method, body: Option<&B>) -> FetchResult<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let builder = RequestBuilder::new(url)
        .method(method)
        .header("Accept", "application/json");

    let request = match body {
        Some(body) => builder.json(body),
        None => builder.header("Content-Type", "application/json").build(),
    }
    .map_err(|e| report(FetchError::Network(format!("Failed to build request: {e:?}"))))?;

    let response = request
        .send()
        .await
        .map_err(|e| report(FetchError::Network(format!("{e:?}"))))?;

    if !response.ok() {
        return Err(report(FetchError::HttpStatus {
            status: response.status(),
            status_text: response.status_text(),
        }));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| report(FetchError::Decode(format!("{e:?}"))))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> FetchResult<T> {
    call_api::<T, ()>(url, Method::GET, None).await
}

fn report(error: FetchError) -> FetchError {
    get_logger().log_with_metadata(
        LogLevel::Error,
        LogComponent::Infrastructure("Http"),
        "API error",
        &error.to_string(),
    );
    error
}

/// HTTP client for the snapshot endpoint
#[derive(Clone)]
pub struct StockApiClient {
    url: String,
}

impl Default for StockApiClient {
    fn default() -> Self {
        Self::new(config().api_url.clone())
    }
}

impl StockApiClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SnapshotRepository for StockApiClient {
    async fn fetch_snapshot(&self) -> FetchResult<Snapshot> {
        crate::log_info!(LogComponent::Infrastructure("StockApi"), "📡 Fetching snapshot from {}", self.url);

        let snapshot: Snapshot = get_json(&self.url).await?;

        get_logger().info(
            LogComponent::Infrastructure("StockApi"),
            &format!(
                "✅ Snapshot loaded: {} stocks",
                snapshot.all_stocks.as_ref().map_or(0, Vec::len)
            ),
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_targets_configured_endpoint() {
        let client = StockApiClient::default();
        assert_eq!(client.url(), config().api_url);
    }
}
