//! Application service layer.
//!
//! The directory service contains the business rules tying the contact
//! store, access tracker and undo log together. Front ends (menu, MCP)
//! talk only to this layer.

mod command;
mod directory_service;

pub use command::{Command, MenuChoice, Outcome};
pub use directory_service::{DirectoryService, DirectoryServiceImpl};

// Re-export common types used by services
pub use crate::models::Contact;
