//! Remote store client
//!
//! Wraps one `EndpointConfig` with a `reqwest` client. Reads are
//! `GET <url>?action=read` plus whatever extras the deployment wants;
//! mutations are JSON `POST`s built by the payload module. The product
//! deployments are flaky enough that their reads get a short fixed-delay
//! retry.

use cafe_core::{ConsoleError, ConsoleResult};
use cafe_schema::EntityRecord;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::api::ApiResponse;
use crate::endpoints::EndpointConfig;

// ============================================================================
// RetryPolicy
// ============================================================================

/// Read retry policy: total attempts and the fixed delay between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    /// Single attempt, no retry
    pub fn none() -> Self {
        Self {
            attempts: 1,
            delay: Duration::ZERO,
        }
    }

    /// The policy product reads use: two retries, two seconds apart
    pub fn product_reads() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_secs(2),
        }
    }

    /// Retry immediately, for tests
    pub fn immediate(attempts: u32) -> Self {
        Self {
            attempts,
            delay: Duration::ZERO,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

// ============================================================================
// HttpStore
// ============================================================================

/// Client for one remote deployment
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    endpoint: EndpointConfig,
    retry: RetryPolicy,
}

impl HttpStore {
    /// Create a store for an endpoint with no read retry
    pub fn new(endpoint: EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            retry: RetryPolicy::none(),
        }
    }

    /// Set the read retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The endpoint this store talks to
    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Whether the deployment filters reads itself
    pub fn handles_search(&self) -> bool {
        self.endpoint.server_search
    }

    /// Query parameters for a read, in the order they go on the URL
    pub(crate) fn read_query(&self, search: Option<&str>) -> Vec<(String, String)> {
        let mut params = vec![("action".to_string(), "read".to_string())];
        for (name, value) in &self.endpoint.read_params {
            params.push((name.clone(), value.clone()));
        }
        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            if self.endpoint.server_search {
                params.push(("search".to_string(), search.to_string()));
            }
        }
        if let Some(key) = &self.endpoint.api_key {
            params.push(("apiKey".to_string(), key.clone()));
        }
        params
    }

    /// Fetch the full record list, retrying per the policy
    pub async fn read(&self, search: Option<&str>) -> ConsoleResult<Vec<EntityRecord>> {
        let params = self.read_query(search);
        let mut last_err = ConsoleError::network("no attempts made");

        for attempt in 1..=self.retry.attempts.max(1) {
            match self.read_once(&params).await {
                Ok(records) => {
                    debug!(url = %self.endpoint.url, rows = records.len(), "read ok");
                    return Ok(records);
                }
                Err(err) => {
                    warn!(
                        url = %self.endpoint.url,
                        attempt,
                        error = %err,
                        "read failed"
                    );
                    last_err = err;
                    if attempt < self.retry.attempts {
                        tokio::time::sleep(self.retry.delay).await;
                    }
                }
            }
        }
        Err(last_err)
    }

    async fn read_once(&self, params: &[(String, String)]) -> ConsoleResult<Vec<EntityRecord>> {
        let response = self
            .client
            .get(&self.endpoint.url)
            .query(params)
            .send()
            .await
            .map_err(|e| ConsoleError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConsoleError::network(format!("HTTP {}", status)));
        }

        let envelope: ApiResponse = response
            .json()
            .await
            .map_err(|e| ConsoleError::malformed(e.to_string()))?;
        envelope.into_records()
    }

    /// Send a mutation body and interpret the acknowledgement
    ///
    /// Mutations are never retried; a timed-out insert may still have
    /// landed on the sheet.
    pub async fn mutate(&self, mut body: Value) -> ConsoleResult<()> {
        if let (Some(key), Some(map)) = (&self.endpoint.api_key, body.as_object_mut()) {
            map.insert("apiKey".to_string(), Value::from(key.as_str()));
        }

        let response = self
            .client
            .post(&self.endpoint.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ConsoleError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConsoleError::network(format!("HTTP {}", status)));
        }

        let envelope: ApiResponse = response
            .json()
            .await
            .map_err(|e| ConsoleError::malformed(e.to_string()))?;
        envelope.into_ack()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::Endpoints;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_retry_policies() {
        assert_eq!(RetryPolicy::none().attempts, 1);
        // Two retries on top of the first attempt, two seconds apart
        let products = RetryPolicy::product_reads();
        assert_eq!(products.attempts, 3);
        assert_eq!(products.delay, Duration::from_secs(2));
    }

    #[test]
    fn test_read_query_plain_endpoint() {
        let store = HttpStore::new(Endpoints::default().brands().clone());
        assert_eq!(
            store.read_query(None),
            vec![("action".to_string(), "read".to_string())]
        );
        // Search is client-side for brands; no extra parameter
        assert_eq!(
            store.read_query(Some("acme")),
            vec![("action".to_string(), "read".to_string())]
        );
    }

    #[test]
    fn test_read_query_employee_endpoint() {
        let store = HttpStore::new(Endpoints::default().employees().clone());
        let params = store.read_query(Some("  ana  "));
        assert_eq!(
            params,
            vec![
                ("action".to_string(), "read".to_string()),
                ("search".to_string(), "ana".to_string()),
                ("apiKey".to_string(), "your-api-key".to_string()),
            ]
        );
        // Blank search is dropped entirely
        let params = store.read_query(Some("   "));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_read_query_product_endpoint() {
        use crate::endpoints::ProductGroup;
        let store = HttpStore::new(Endpoints::default().products(ProductGroup::Espresso));
        assert_eq!(
            store.read_query(None),
            vec![
                ("action".to_string(), "read".to_string()),
                ("dataType".to_string(), "products".to_string()),
            ]
        );
    }
}
