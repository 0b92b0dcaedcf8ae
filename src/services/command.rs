//! Commands accepted by the directory and the outcomes they produce.

use crate::models::Contact;
use std::fmt;

/// Numbered menu entries, 0 through 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Exit,
    View,
    Search,
    Add,
    Edit,
    Delete,
    Sort,
    Undo,
    Report,
}

impl MenuChoice {
    /// Entries in menu display order (exit last, as the menu shows it).
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::View,
        MenuChoice::Search,
        MenuChoice::Add,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::Sort,
        MenuChoice::Undo,
        MenuChoice::Report,
        MenuChoice::Exit,
    ];

    /// Map a menu number to its entry.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            0 => Some(Self::Exit),
            1 => Some(Self::View),
            2 => Some(Self::Search),
            3 => Some(Self::Add),
            4 => Some(Self::Edit),
            5 => Some(Self::Delete),
            6 => Some(Self::Sort),
            7 => Some(Self::Undo),
            8 => Some(Self::Report),
            _ => None,
        }
    }

    /// Parse a line of user input such as `" 3\n"`.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<u8>().ok().and_then(Self::from_number)
    }

    pub fn number(self) -> u8 {
        match self {
            Self::Exit => 0,
            Self::View => 1,
            Self::Search => 2,
            Self::Add => 3,
            Self::Edit => 4,
            Self::Delete => 5,
            Self::Sort => 6,
            Self::Undo => 7,
            Self::Report => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::View => "View Contacts",
            Self::Search => "Search For a Contact",
            Self::Add => "Add Contact",
            Self::Edit => "Edit Contact",
            Self::Delete => "Delete Contact",
            Self::Sort => "Sort Contacts",
            Self::Undo => "Undo Last Action",
            Self::Report => "View Most Accessed Contacts",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.number(), self.label())
    }
}

/// A fully parsed request for the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    View,
    Search {
        query: String,
    },
    Add {
        name: String,
        phone: String,
    },
    Edit {
        name: String,
        new_name: String,
        new_phone: String,
    },
    Delete {
        name: String,
    },
    Sort,
    Undo,
    Report,
}

impl Command {
    /// The menu entry this command corresponds to.
    pub fn choice(&self) -> MenuChoice {
        match self {
            Self::Exit => MenuChoice::Exit,
            Self::View => MenuChoice::View,
            Self::Search { .. } => MenuChoice::Search,
            Self::Add { .. } => MenuChoice::Add,
            Self::Edit { .. } => MenuChoice::Edit,
            Self::Delete { .. } => MenuChoice::Delete,
            Self::Sort => MenuChoice::Sort,
            Self::Undo => MenuChoice::Undo,
            Self::Report => MenuChoice::Report,
        }
    }
}

/// Structured result of a successful command, for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The session should end
    Exit,

    /// Every contact in store order
    Contacts(Vec<Contact>),

    /// Contacts matching a search query (possibly empty)
    SearchResults {
        query: String,
        matches: Vec<Contact>,
    },

    Added(Contact),

    Updated {
        previous: Contact,
        current: Contact,
    },

    Deleted(Contact),

    /// Number of contacts re-sorted
    Sorted(usize),

    /// Contact removed by reversing an add
    Undone(Contact),

    /// Access counts, most accessed first
    AccessReport(Vec<(String, u64)>),
}
