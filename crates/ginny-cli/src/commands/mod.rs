//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `actions` - Action listing and persona instructions
//! - `config` - Config show/path and the shared loader
//! - `run` - Replay an action script against a fresh budget
//! - `serve` - Web and MCP server command

pub mod actions;
pub mod config;
pub mod run;
pub mod serve;

// Re-export command functions for main.rs
pub use actions::*;
pub use config::*;
pub use run::*;
pub use serve::*;
