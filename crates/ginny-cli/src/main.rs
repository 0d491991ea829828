//! Ginny CLI - Gen-Z budgeting assistant
//!
//! Usage:
//!   ginny serve --port 3000 --mcp-port 3001   Start web and MCP servers
//!   ginny actions                             List assistant actions
//!   ginny run --file script.jsonl             Replay actions from a script
//!   ginny config show                         Print effective config

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
            mcp_port,
        } => {
            let config = commands::load_config(cli.config.as_deref())?;
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let mcp_port = mcp_port.or(config.server.mcp_port);
            commands::cmd_serve(&config, &host, port, static_dir.as_deref(), mcp_port).await
        }
        Commands::Actions { json, instructions } => commands::cmd_actions(json, instructions),
        Commands::Run { file, export } => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::cmd_run(&config, &file, export.as_deref())
        }
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => {
                let config = commands::load_config(cli.config.as_deref())?;
                commands::cmd_config_show(&config)
            }
            Some(ConfigAction::Path) => commands::cmd_config_path(),
        },
    }
}
