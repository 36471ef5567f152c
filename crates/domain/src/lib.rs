//! Dohgen Domain Layer
pub mod config;
pub mod errors;
pub mod host_entry;
pub mod record_type;

pub use config::{CliOverrides, Config, FilesConfig, LoggingConfig, ResolverConfig};
pub use errors::DomainError;
pub use host_entry::HostEntry;
pub use record_type::RecordType;
