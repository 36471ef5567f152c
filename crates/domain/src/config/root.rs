use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::files::FilesConfig;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use crate::errors::DomainError;

/// Default config written out when no config file exists yet.
const DEFAULT_CONFIG: &str = r#"# dohgen configuration
#
# server examples:
#   https://dns.google/dns-query
#   https://cloudflare-dns.com/dns-query

[resolver]
server = "https://dns.google/dns-query"
ipv4 = true
ipv6 = true
query_timeout = 5

[files]
input = "input.txt"
output = "output.txt"
extra = "extra.txt"
merged = "hosts.txt"

[logging]
level = "info"
"#;

/// Settings the command line may override after the file is loaded.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub ipv4: Option<bool>,
    pub ipv6: Option<bool>,
    pub input: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from `path`, creating a default config file there
    /// when it does not exist yet.
    pub fn load(path: &str, overrides: CliOverrides) -> Result<Config, DomainError> {
        let mut config = if Path::new(path).exists() {
            let contents = fs::read_to_string(path)
                .map_err(|e| DomainError::Config(format!("Cannot read {}: {}", path, e)))?;
            toml::from_str(&contents)
                .map_err(|e| DomainError::Config(format!("Cannot parse {}: {}", path, e)))?
        } else {
            warn!(path = %path, "Config file not found, writing defaults");
            fs::write(path, DEFAULT_CONFIG)
                .map_err(|e| DomainError::Config(format!("Cannot create {}: {}", path, e)))?;
            Config::default()
        };

        config.apply(overrides);
        Ok(config)
    }

    fn apply(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.resolver.server = server;
        }
        if let Some(ipv4) = overrides.ipv4 {
            self.resolver.ipv4 = ipv4;
        }
        if let Some(ipv6) = overrides.ipv6 {
            self.resolver.ipv6 = ipv6;
        }
        if let Some(input) = overrides.input {
            self.files.input = input;
        }
        if let Some(output) = overrides.output {
            self.files.output = output;
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.resolver.server.starts_with("https://")
            && !self.resolver.server.starts_with("http://")
        {
            return Err(DomainError::Config(format!(
                "resolver.server must be an http(s) URL, got '{}'",
                self.resolver.server
            )));
        }
        if self.resolver.query_timeout == 0 {
            return Err(DomainError::Config(
                "resolver.query_timeout must be at least 1 second".to_string(),
            ));
        }
        if !self.resolver.ipv4 && !self.resolver.ipv6 {
            info!("Both protocol families disabled, nothing will resolve");
        }
        Ok(())
    }
}
