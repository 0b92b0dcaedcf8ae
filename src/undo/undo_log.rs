//! Bounded history of mutating actions for single-step undo.

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Contact;
use crate::repositories::ContactRepository;
use crate::tracking::AccessTracker;
use std::collections::VecDeque;
use std::fmt;

/// Default number of actions remembered before the oldest is discarded.
pub const DEFAULT_UNDO_DEPTH: usize = 64;

/// Kind of mutation recorded in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Add,
    Delete,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "Add"),
            Self::Delete => write!(f, "Delete"),
        }
    }
}

/// A recorded mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoAction {
    pub kind: ActionKind,
    pub name: String,
}

/// LIFO log of recent adds and deletes.
///
/// Only the most recent entry is ever consumed. When `capacity` entries are
/// held, recording a new one discards the oldest.
#[derive(Debug, Clone)]
pub struct UndoLog {
    actions: VecDeque<UndoAction>,
    capacity: usize,
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_UNDO_DEPTH)
    }
}

impl UndoLog {
    /// Create a log with the default depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log remembering at most `capacity` actions (minimum 1).
    ///
    /// The bound is enforced on push; storage grows on demand, so a large
    /// depth costs nothing until it is used.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            actions: VecDeque::with_capacity(capacity.min(DEFAULT_UNDO_DEPTH)),
            capacity,
        }
    }

    /// Record a successful add.
    pub fn record_add(&mut self, name: &str) {
        self.push(ActionKind::Add, name);
    }

    /// Record a successful delete.
    pub fn record_delete(&mut self, name: &str) {
        self.push(ActionKind::Delete, name);
    }

    fn push(&mut self, kind: ActionKind, name: &str) {
        if self.actions.len() == self.capacity {
            self.actions.pop_front();
        }
        self.actions.push_back(UndoAction {
            kind,
            name: name.to_string(),
        });
    }

    /// The action the next `undo` would consume.
    pub fn peek(&self) -> Option<&UndoAction> {
        self.actions.back()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Pop and reverse the most recent action.
    ///
    /// Reversing an add removes the first contact with that name from `store`
    /// and counts as an access. Deletes are never restored: the entry is
    /// consumed and `UnsupportedUndo` is returned.
    pub fn undo(
        &mut self,
        store: &mut dyn ContactRepository,
        tracker: &mut AccessTracker,
    ) -> DirectoryResult<Contact> {
        let action = self.actions.pop_back().ok_or(DirectoryError::EmptyLog)?;

        match action.kind {
            ActionKind::Add => {
                let removed = store.delete(&action.name)?;
                tracker.record_access(&removed.name);
                Ok(removed)
            }
            ActionKind::Delete => Err(DirectoryError::UnsupportedUndo { name: action.name }),
        }
    }
}
