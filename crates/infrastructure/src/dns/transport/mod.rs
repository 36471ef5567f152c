pub mod https;

use async_trait::async_trait;
use dohgen_domain::DomainError;
use std::time::Duration;

pub use https::HttpsTransport;

/// One DNS message exchange over some carrier.
///
/// Takes the encoded query bytes, returns the raw response bytes. The
/// resolver treats any error as "zero addresses for this lookup" and moves
/// on; transports own all timeout handling.
#[async_trait]
pub trait DohTransport: Send + Sync {
    async fn exchange(&self, query: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError>;

    fn endpoint(&self) -> &str;
}
