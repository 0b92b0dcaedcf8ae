//! MCP server front end for the phone directory.
//!
//! This module exposes the directory operations to AI assistants through
//! the Model Context Protocol.

pub mod handlers;

pub use handlers::DirectoryMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the directory MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when
/// the client disconnects.
pub async fn run_server(server: DirectoryMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
