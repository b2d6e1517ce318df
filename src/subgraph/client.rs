use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use log::warn;
use moka::future::Cache;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// GraphQL client for network-specific indexing endpoints.
///
/// Responses are never cached: every call re-requests, so the dashboard
/// shows live figures instead of stale ones. What IS shared is the
/// in-flight work — identical concurrent requests (same endpoint, document
/// and variables) coalesce into a single HTTP call, and the coalescing
/// entry is dropped the moment the response resolves.
pub struct SubgraphClient {
    http: reqwest::Client,
    inflight: Cache<String, Arc<Value>>,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct GraphqlEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

impl SubgraphClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        // Capacity only bounds concurrent distinct requests; entries are
        // invalidated as soon as they resolve.
        let inflight = Cache::builder().max_capacity(1_000).build();

        Ok(Self { http, inflight })
    }

    /// Execute a GraphQL query and deserialize the `data` payload into `T`.
    pub async fn query<T>(&self, endpoint: &str, document: &str, variables: Value) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = Url::parse(endpoint)
            .with_context(|| format!("Invalid subgraph endpoint: {endpoint}"))?;

        let key = format!("{endpoint}\n{document}\n{variables}");

        let data = self
            .inflight
            .try_get_with(key.clone(), self.execute(url, document, &variables))
            .await
            .map_err(|e: Arc<anyhow::Error>| anyhow!("{e:#}"))?;

        // Drop the coalescing entry right away so the next caller
        // re-requests instead of reading a cached response.
        self.inflight.invalidate(&key).await;

        T::deserialize(data.as_ref()).context("Unexpected subgraph result shape")
    }

    async fn execute(&self, url: Url, document: &str, variables: &Value) -> Result<Arc<Value>> {
        let body = serde_json::json!({ "query": document, "variables": variables });

        let response = self
            .http
            .post(url.clone())
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Subgraph request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("Subgraph at {url} answered with an error status"))?;

        let envelope: GraphqlEnvelope = response
            .json()
            .await
            .with_context(|| format!("Malformed response from subgraph at {url}"))?;

        unwrap_envelope(envelope, &url)
    }
}

/// Apply the partial-data policy to a GraphQL envelope.
///
/// Field errors alongside usable data are logged and the data kept, so one
/// failing field makes a chart sparser instead of blanking the dashboard.
/// Errors without data are a failed request.
fn unwrap_envelope(envelope: GraphqlEnvelope, url: &Url) -> Result<Arc<Value>> {
    match envelope.data {
        Some(data) if !data.is_null() => {
            if !envelope.errors.is_empty() {
                warn!(
                    "Subgraph at {} answered with {} field error(s), keeping partial data: {}",
                    url,
                    envelope.errors.len(),
                    envelope.errors[0].message
                );
            }
            Ok(Arc::new(data))
        },
        _ if !envelope.errors.is_empty() => {
            let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
            bail!("Subgraph at {url} returned errors: {}", messages.join("; "))
        },
        _ => bail!("Subgraph at {url} returned neither data nor errors"),
    }
}
