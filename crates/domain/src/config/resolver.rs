use serde::{Deserialize, Serialize};

/// DNS-over-HTTPS resolver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// DoH endpoint URL (RFC 8484 POST)
    #[serde(default = "default_server")]
    pub server: String,

    /// Query A records
    #[serde(default = "default_true")]
    pub ipv4: bool,

    /// Query AAAA records
    #[serde(default = "default_true")]
    pub ipv6: bool,

    /// Per-exchange timeout in seconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            ipv4: true,
            ipv6: true,
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_server() -> String {
    "https://dns.google/dns-query".to_string()
}

fn default_true() -> bool {
    true
}

fn default_query_timeout() -> u64 {
    5
}
