use std::fs;
use std::path::Path;

use dohgen_domain::DomainError;
use tracing::warn;

/// One line of the input domain list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListLine {
    /// Blank line or `#` comment, copied to the output verbatim.
    Passthrough(String),
    /// A domain to resolve (already trimmed).
    Domain(String),
}

/// Read the domain list at `path`, creating an empty file when missing so
/// a first run leaves something to edit behind.
pub fn read_domains(path: &str) -> Result<Vec<ListLine>, DomainError> {
    if !Path::new(path).exists() {
        warn!(path = %path, "Input file not found, creating an empty one");
        fs::write(path, "")?;
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(parse_line).collect())
}

fn parse_line(line: &str) -> ListLine {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        ListLine::Passthrough(line.to_string())
    } else {
        ListLine::Domain(trimmed.to_string())
    }
}
