//! # dohgen
//!
//! Resolves a domain list over DNS-over-HTTPS and assembles a hosts file.

mod bootstrap;
mod run;

use clap::Parser;
use dohgen_domain::CliOverrides;

#[derive(Parser)]
#[command(name = "dohgen")]
#[command(version)]
#[command(about = "Builds a hosts file by resolving domains over DNS-over-HTTPS")]
struct Cli {
    /// Config file path (created with defaults if missing)
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// DoH endpoint URL, overrides the config file
    #[arg(short, long)]
    server: Option<String>,

    /// Skip A lookups
    #[arg(long)]
    no_ipv4: bool,

    /// Skip AAAA lookups
    #[arg(long)]
    no_ipv6: bool,

    /// Domain list path, overrides the config file
    #[arg(short, long)]
    input: Option<String>,

    /// Output path, overrides the config file
    #[arg(short, long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        server: cli.server,
        ipv4: cli.no_ipv4.then_some(false),
        ipv6: cli.no_ipv6.then_some(false),
        input: cli.input,
        output: cli.output,
    };

    let config = bootstrap::config::load_config(&cli.config, overrides)?;
    bootstrap::logging::init_logging(&config);

    tracing::info!(
        config_file = %cli.config,
        server = %config.resolver.server,
        ipv4 = config.resolver.ipv4,
        ipv6 = config.resolver.ipv6,
        "Configuration loaded"
    );

    run::run(&config).await
}
