use super::DohTransport;
use async_trait::async_trait;
use dohgen_domain::DomainError;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP/2 client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(2)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Content type for DoH requests and responses (RFC 8484 §4.2.1)
const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// DNS-over-HTTPS transport (RFC 8484 POST)
pub struct HttpsTransport {
    url: String,
}

impl HttpsTransport {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

#[async_trait]
impl DohTransport for HttpsTransport {
    async fn exchange(&self, query: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError> {
        debug!(url = %self.url, query_len = query.len(), "Sending DoH query");

        let response = tokio::time::timeout(
            timeout,
            SHARED_CLIENT
                .post(&self.url)
                .header("Content-Type", DNS_MESSAGE_CONTENT_TYPE)
                .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
                .body(query.to_vec())
                .send(),
        )
        .await
        .map_err(|_| DomainError::Timeout(self.url.clone()))?
        .map_err(|e| DomainError::Transport(format!("DoH request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        // Body is the raw DNS message, handed to the decoder verbatim.
        let body = tokio::time::timeout(timeout, response.bytes())
            .await
            .map_err(|_| DomainError::Timeout(self.url.clone()))?
            .map_err(|e| {
                DomainError::Transport(format!(
                    "Failed to read DoH response from {}: {}",
                    self.url, e
                ))
            })?;

        debug!(url = %self.url, response_len = body.len(), "DoH response received");

        Ok(body.to_vec())
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
