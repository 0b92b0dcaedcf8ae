//! Phone Directory - Main entry point
//!
//! Runs the interactive menu by default, or an MCP server over stdio when
//! `DIRECTORY_MODE=mcp`.

use anyhow::Result;
use phone_directory::{Config, DirectoryMcpServer, DirectoryServiceImpl, RunMode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging (stderr only so stdout stays free for the menu and MCP)
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut directory = DirectoryServiceImpl::from_config(&config);
    info!(
        mode = %config.mode,
        undo_depth = config.undo_depth,
        "Phone directory initialized"
    );

    match config.mode {
        RunMode::Menu => {
            phone_directory::cli::run_menu(&mut directory, config.color)?;
        }
        RunMode::Mcp => {
            info!("Starting MCP server with stdio transport");
            let server = DirectoryMcpServer::new(directory);
            phone_directory::server::run_server(server).await?;
        }
    }

    info!("Phone directory session ended");
    Ok(())
}
