use std::fmt;
use std::sync::Arc;

/// One line of hosts-file output: an address paired with the domain it
/// was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub address: String,
    pub domain: Arc<str>,
}

impl HostEntry {
    pub fn new(address: String, domain: Arc<str>) -> Self {
        Self { address, domain }
    }
}

impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.address, self.domain)
    }
}
