//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ginny - A Gen-Z budgeting assistant built on the 50/30/20 rule
#[derive(Parser)]
#[command(name = "ginny")]
#[command(about = "Budgeting assistant core: 50/30/20 budget store and assistant actions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the data dir override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (and optionally the MCP server)
    Serve {
        /// Port to listen on [default: from config, 3000]
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to [default: from config, 127.0.0.1]
        #[arg(long)]
        host: Option<String>,

        /// Directory containing the browser UI bundle to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Port for MCP (Model Context Protocol) server
        ///
        /// When set, starts an MCP server exposing the budget actions as tools
        /// for a conversational assistant. Example: --mcp-port 3001
        #[arg(long)]
        mcp_port: Option<u16>,
    },

    /// List the actions the assistant can call
    Actions {
        /// Print definitions (with JSON Schemas) as JSON
        #[arg(long)]
        json: bool,

        /// Print the assistant persona instructions instead
        #[arg(long, conflicts_with = "json")]
        instructions: bool,
    },

    /// Replay a JSONL script of actions against a fresh budget
    ///
    /// Each line is {"action": "<name>", "params": {...}}. Blank lines and
    /// lines starting with '#' are skipped.
    Run {
        /// Script file
        #[arg(short, long)]
        file: PathBuf,

        /// Write the resulting budget to this CSV file
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config override path
    Path,
}
