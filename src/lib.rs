//! Phone Directory - an in-memory contact directory.
//!
//! Stores name/phone pairs in name order and supports substring search,
//! in-place edits, deletes, a full re-sort, undo of the last add, and a
//! per-contact access-frequency report.
//!
//! # Architecture
//!
//! - **models**: The `Contact` record
//! - **error**: Custom error types for directory outcomes and configuration
//! - **config**: Configuration management from environment variables
//! - **repositories**: The ordered contact store behind a repository trait
//! - **tracking**: Per-name access counting
//! - **undo**: Bounded undo log for adds and deletes
//! - **services**: The directory service orchestrating the above
//! - **cli**: Interactive numbered menu
//! - **server**: MCP protocol server

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod tracking;
pub mod undo;

pub use config::{Config, RunMode};
pub use error::{ConfigError, DirectoryError, DirectoryResult};
pub use models::Contact;
pub use repositories::{ContactRepository, ContactStore};
pub use server::DirectoryMcpServer;
pub use services::{Command, DirectoryService, DirectoryServiceImpl, MenuChoice, Outcome};
pub use tracking::AccessTracker;
pub use undo::{ActionKind, UndoAction, UndoLog};
