use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use dohgen_domain::DomainError;
use tracing::info;

/// Concatenate every existing file in `sources` into `dest`, each bracketed
/// by start/end marker comments. Missing sources are skipped, not errors:
/// the extra file in particular is optional.
pub fn merge_files(sources: &[&str], dest: &str) -> Result<(), DomainError> {
    let file = File::create(dest)?;
    let mut writer = BufWriter::new(file);

    for source in sources {
        if !Path::new(source).exists() {
            info!(path = %source, "Merge source missing, skipped");
            continue;
        }
        let contents = fs::read_to_string(source)?;
        writeln!(writer, "# --- Start of {} ---", source)?;
        for line in contents.lines() {
            writeln!(writer, "{}", line)?;
        }
        writeln!(writer, "# --- End of {} ---", source)?;
        writeln!(writer)?;
        info!(path = %source, "Merged");
    }

    writer.flush()?;
    info!(path = %dest, "Merge finished");
    Ok(())
}
