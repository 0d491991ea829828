//! Config commands

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use ginny_core::config::default_config_path;
use ginny_core::GinnyConfig;

/// Load config from an explicit path, the override file, or built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<GinnyConfig> {
    let config = GinnyConfig::load(path).with_context(|| match path {
        Some(p) => format!("Failed to load config from {}", p.display()),
        None => "Failed to load config".to_string(),
    })?;
    debug!(
        host = %config.server.host,
        port = config.server.port,
        "Config loaded"
    );
    Ok(config)
}

pub fn cmd_config_show(config: &GinnyConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn cmd_config_path() -> Result<()> {
    match default_config_path() {
        Some(path) => {
            let status = if path.exists() {
                "exists"
            } else {
                "not found, using built-in defaults"
            };
            println!("{} ({})", path.display(), status);
        }
        None => println!("No data directory on this platform; using built-in defaults"),
    }
    Ok(())
}
