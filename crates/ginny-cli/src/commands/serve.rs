//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};

use ginny_core::{BudgetSession, GinnyConfig};

pub async fn cmd_serve(
    config: &GinnyConfig,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
    mcp_port: Option<u16>,
) -> Result<()> {
    println!("🚀 Starting Ginny web server...");
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if let Some(mcp) = mcp_port {
        println!("   MCP server: http://{}:{}/mcp", host, mcp);
    }

    // Env var overrides the configured origins (comma-separated)
    let allowed_origins = match std::env::var("GINNY_ALLOWED_ORIGINS") {
        Ok(value) => ginny_server::parse_allowed_origins(&value),
        Err(_) => config.server.allowed_origins.clone(),
    };
    if !allowed_origins.is_empty() {
        println!("   🌐 Allowed origins: {}", allowed_origins.join(", "));
    }
    println!();
    println!("   Budgets live in memory only and are lost on exit");
    println!("   Press Ctrl+C to stop");

    let session = ginny_server::shared_session(BudgetSession::new(config.advisor.clone()));
    let server_config = ginny_server::ServerConfig { allowed_origins };

    // Start MCP server if port specified
    if let Some(mcp) = mcp_port {
        let mcp_session = session.clone();
        let mcp_host = host.to_string();
        tokio::spawn(async move {
            if let Err(e) = ginny_server::mcp::start_mcp_server(mcp_session, &mcp_host, mcp).await
            {
                eprintln!("MCP server error: {}", e);
            }
        });
    }

    let static_dir_str = static_dir
        .map(|p| p.to_str().context("static_dir path must be valid UTF-8"))
        .transpose()?;
    ginny_server::serve_with_config(session, host, port, static_dir_str, server_config).await?;

    Ok(())
}
