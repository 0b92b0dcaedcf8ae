//! MCP tool handlers for the phone directory.
//!
//! This module exposes the directory operations as MCP tools using the rmcp
//! SDK's tool_router pattern. Tool calls share one directory behind a mutex,
//! so they are applied one at a time.

use crate::error::DirectoryError;
use crate::services::{Command, DirectoryService, DirectoryServiceImpl, Outcome};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The MCP server that exposes tools for managing the directory.
#[derive(Clone)]
pub struct DirectoryMcpServer {
    directory: Arc<Mutex<DirectoryServiceImpl>>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for DirectoryMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "phone-directory".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("In-memory phone directory - add, search, edit, delete and sort contacts, undo the last add, and view the most accessed contacts.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContactsParams {
    /// Substring to look for in names and phone numbers (case-sensitive)
    query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactParams {
    name: String,
    phone: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct EditContactParams {
    /// Exact name of the contact to edit
    name: String,
    new_name: String,
    new_phone: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactNameParams {
    /// Exact name of the contact
    name: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// JSON body describing a successful outcome.
pub(crate) fn outcome_json(outcome: &Outcome) -> Value {
    match outcome {
        Outcome::Exit => json!({ "status": "exit" }),
        Outcome::Contacts(contacts) => json!({
            "count": contacts.len(),
            "contacts": contacts,
        }),
        Outcome::SearchResults { query, matches } => json!({
            "query": query,
            "result_count": matches.len(),
            "results": matches,
        }),
        Outcome::Added(contact) => json!({ "status": "added", "contact": contact }),
        Outcome::Updated { previous, current } => json!({
            "status": "updated",
            "previous": previous,
            "current": current,
        }),
        Outcome::Deleted(contact) => json!({ "status": "deleted", "contact": contact }),
        Outcome::Sorted(count) => json!({ "status": "sorted", "count": count }),
        Outcome::Undone(contact) => json!({ "status": "undone", "removed": contact }),
        Outcome::AccessReport(entries) => json!({
            "most_accessed": entries.iter().map(|(name, count)| {
                json!({ "name": name, "access_count": count })
            }).collect::<Vec<_>>(),
        }),
    }
}

/// JSON body describing a failed operation.
pub(crate) fn error_json(err: &DirectoryError) -> Value {
    let kind = match err {
        DirectoryError::NotFound(_) => "not_found",
        DirectoryError::EmptyLog => "empty_log",
        DirectoryError::UnsupportedUndo { .. } => "unsupported_undo",
    };
    json!({ "error": kind, "message": err.to_string() })
}

impl DirectoryMcpServer {
    /// Shared handle to the directory behind the tools.
    pub fn directory(&self) -> Arc<Mutex<DirectoryServiceImpl>> {
        self.directory.clone()
    }

    async fn run(&self, command: Command) -> Result<CallToolResult, McpError> {
        let choice = command.choice();
        let result = {
            let mut directory = self.directory.lock().await;
            directory.execute(command)
        };

        match result {
            Ok(outcome) => {
                let body = serde_json::to_string_pretty(&outcome_json(&outcome))
                    .map_err(to_mcp_error)?;
                Ok(CallToolResult::success(vec![Content::text(body)]))
            }
            Err(e) => {
                tracing::warn!(command = %choice, "Tool call failed: {}", e);
                let body = serde_json::to_string_pretty(&error_json(&e)).map_err(to_mcp_error)?;
                Ok(CallToolResult::error(vec![Content::text(body)]))
            }
        }
    }
}

// Tool router implementation
#[tool_router]
impl DirectoryMcpServer {
    /// Create a new MCP server around `directory`.
    pub fn new(directory: DirectoryServiceImpl) -> Self {
        Self {
            directory: Arc::new(Mutex::new(directory)),
            tool_router: Self::tool_router(),
        }
    }

    /// List every contact in current order.
    #[tool(description = "List every contact in the directory in its current order")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        self.run(Command::View).await
    }

    /// Search contacts by substring of name or phone.
    #[tool(
        description = "Find contacts whose name or phone number contains the query (case-sensitive). Each match counts as an access."
    )]
    async fn search_contacts(
        &self,
        params: Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        self.run(Command::Search {
            query: params.query,
        })
        .await
    }

    /// Add a contact in sorted position.
    #[tool(description = "Add a contact, keeping the directory sorted by name")]
    async fn add_contact(
        &self,
        params: Parameters<AddContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: add_contact called");
        self.run(Command::Add {
            name: params.name,
            phone: params.phone,
        })
        .await
    }

    /// Replace name and phone of an existing contact.
    #[tool(
        description = "Replace the name and phone number of the first contact with the given name. The directory is not re-sorted."
    )]
    async fn edit_contact(
        &self,
        params: Parameters<EditContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        self.run(Command::Edit {
            name: params.name,
            new_name: params.new_name,
            new_phone: params.new_phone,
        })
        .await
    }

    /// Delete a contact by exact name.
    #[tool(description = "Delete the first contact with the given name")]
    async fn delete_contact(
        &self,
        params: Parameters<ContactNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: delete_contact called");
        self.run(Command::Delete { name: params.name }).await
    }

    /// Re-sort all contacts by name.
    #[tool(description = "Sort all contacts by name in ascending order")]
    async fn sort_contacts(&self) -> Result<CallToolResult, McpError> {
        self.run(Command::Sort).await
    }

    /// Undo the most recent add or delete.
    #[tool(
        description = "Undo the most recent add (removes the contact). Undoing a delete is not supported and reports an error."
    )]
    async fn undo_last_action(&self) -> Result<CallToolResult, McpError> {
        self.run(Command::Undo).await
    }

    /// Report access counts.
    #[tool(description = "Show how often each contact was accessed by search, add or delete, most accessed first")]
    async fn most_accessed_contacts(&self) -> Result<CallToolResult, McpError> {
        self.run(Command::Report).await
    }
}
