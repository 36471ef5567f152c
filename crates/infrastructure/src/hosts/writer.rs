use std::fs::File;
use std::io::{BufWriter, Write};

use dohgen_domain::DomainError;
use tracing::info;

/// Write `lines` to `path`, one per line, replacing any existing file.
pub fn write_lines(path: &str, lines: &[String]) -> Result<(), DomainError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    info!(path = %path, lines = lines.len(), "Output written");
    Ok(())
}
