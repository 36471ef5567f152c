use std::sync::Arc;

use dohgen_domain::{Config, HostEntry};
use dohgen_infrastructure::dns::{DohResolver, HttpsTransport};
use dohgen_infrastructure::hosts::{merge_files, read_domains, write_lines, ListLine};
use tracing::info;

/// Full pipeline: read the domain list, resolve each entry, write the
/// hosts-style output, then merge it with the extra file.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let transport = Arc::new(HttpsTransport::new(config.resolver.server.clone()));
    let resolver = DohResolver::new(transport, config.resolver.clone());

    let lines = read_domains(&config.files.input)?;
    let domain_count = lines
        .iter()
        .filter(|l| matches!(l, ListLine::Domain(_)))
        .count();
    info!(
        input = %config.files.input,
        domains = domain_count,
        "Domain list loaded"
    );

    let mut output = Vec::new();
    let mut resolved_domains = 0usize;

    for line in lines {
        match line {
            ListLine::Passthrough(text) => output.push(text),
            ListLine::Domain(domain) => {
                let addresses = resolver.resolve(&domain).await;
                if addresses.is_empty() {
                    info!(domain = %domain, "No addresses resolved");
                    continue;
                }
                info!(domain = %domain, count = addresses.len(), "Resolved");
                resolved_domains += 1;
                let domain: Arc<str> = Arc::from(domain);
                for address in addresses {
                    output.push(HostEntry::new(address, Arc::clone(&domain)).to_string());
                }
            }
        }
    }

    write_lines(&config.files.output, &output)?;
    info!(
        resolved = resolved_domains,
        total = domain_count,
        "Resolution finished"
    );

    merge_files(
        &[config.files.output.as_str(), config.files.extra.as_str()],
        &config.files.merged,
    )?;

    Ok(())
}
