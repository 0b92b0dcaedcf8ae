//! Interactive numbered-menu front end.
//!
//! Reads menu choices and field values line by line, forwards parsed
//! commands to a [`DirectoryService`](crate::services::DirectoryService)
//! and renders the returned outcomes as text.

pub mod menu;
pub mod session;

pub use menu::MenuRenderer;
pub use session::Session;

use crate::services::DirectoryService;
use std::io;

/// Run the menu on the process's stdin and stdout.
pub fn run_menu<S: DirectoryService + ?Sized>(service: &mut S, color: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), MenuRenderer::new(color));
    session.run(service)
}
