// HTTP JSON source backed by reqwest (browser fetch on wasm32)
use crate::application::json_source::JsonSource;
use crate::domain::error::{DashboardError, Result};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct HttpJsonSource {
    client: reqwest::Client,
}

impl HttpJsonSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl JsonSource for HttpJsonSource {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let network = |message: String| DashboardError::Network {
            url: url.to_string(),
            message,
        };

        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(network(format!("server responded with status {}", response.status())));
        }

        // Read the body as text first so a broken connection stays a network
        // failure and only an unparseable body becomes a decode failure.
        let body = response.text().await.map_err(|e| network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| DashboardError::decode(format!("response from {}", url), e))
    }
}
