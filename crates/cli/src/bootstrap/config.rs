use dohgen_domain::{CliOverrides, Config};

/// Load and validate the configuration. Called before logging is up
/// (the log level lives in the config), so no tracing here.
pub fn load_config(config_path: &str, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
