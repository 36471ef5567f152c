//! Configuration for dohgen
//!
//! - `root`: top-level config, loading and CLI overrides
//! - `resolver`: DoH endpoint and protocol family toggles
//! - `files`: input/output/merge file paths
//! - `logging`: logging settings

pub mod files;
pub mod logging;
pub mod resolver;
pub mod root;

pub use files::FilesConfig;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
