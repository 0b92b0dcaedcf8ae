//! Undo support for add and delete operations.

pub mod undo_log;

pub use undo_log::{ActionKind, UndoAction, UndoLog, DEFAULT_UNDO_DEPTH};
