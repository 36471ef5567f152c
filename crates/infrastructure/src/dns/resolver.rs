use std::sync::Arc;
use std::time::Duration;

use ahash::AHashSet;
use dohgen_domain::{DomainError, RecordType, ResolverConfig};
use tracing::{debug, warn};

use super::transport::DohTransport;
use super::wire::{QueryEncoder, ResponseDecoder};

/// Resolves one domain at a time over a DoH transport.
///
/// Configuration is an immutable value handed in at construction; the
/// resolver holds no cross-call state, so concurrent `resolve` calls are
/// safe.
pub struct DohResolver {
    transport: Arc<dyn DohTransport>,
    config: ResolverConfig,
}

impl DohResolver {
    pub fn new(transport: Arc<dyn DohTransport>, config: ResolverConfig) -> Self {
        Self { transport, config }
    }

    /// Resolve every enabled record type for `domain`, merged
    /// insertion-ordered with duplicates suppressed (A results first).
    pub async fn resolve(&self, domain: &str) -> Vec<String> {
        let (v4, v6) = tokio::join!(
            self.resolve_family(domain, RecordType::A, self.config.ipv4),
            self.resolve_family(domain, RecordType::AAAA, self.config.ipv6),
        );

        let mut seen = AHashSet::with_capacity(v4.len() + v6.len());
        let mut merged = Vec::with_capacity(v4.len() + v6.len());
        for address in v4.into_iter().chain(v6) {
            if seen.insert(address.clone()) {
                merged.push(address);
            }
        }
        merged
    }

    async fn resolve_family(&self, domain: &str, record_type: RecordType, enabled: bool) -> Vec<String> {
        if !enabled {
            return Vec::new();
        }
        self.resolve_type(domain, record_type).await
    }

    /// Resolve a single record type. Never fails: encoder and transport
    /// errors degrade to an empty result so one bad domain or one flaky
    /// exchange cannot stop the surrounding loop.
    pub async fn resolve_type(&self, domain: &str, record_type: RecordType) -> Vec<String> {
        let query = match QueryEncoder::encode(domain, record_type) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(domain = %domain, record_type = %record_type, error = %e, "Skipping unencodable domain");
                return Vec::new();
            }
        };

        let timeout = Duration::from_secs(self.config.query_timeout);
        let response = match self.transport.exchange(&query, timeout).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    domain = %domain,
                    record_type = %record_type,
                    server = %self.transport.endpoint(),
                    error = %e,
                    "DoH exchange failed"
                );
                return Vec::new();
            }
        };

        let addresses = ResponseDecoder::extract_addresses(&response, record_type);
        debug!(
            domain = %domain,
            record_type = %record_type,
            count = addresses.len(),
            "Lookup finished"
        );
        addresses
    }
}
