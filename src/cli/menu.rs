//! Text rendering for the interactive menu.
//!
//! Produces plain strings from directory outcomes. Colors are applied with
//! `console` styles and can be switched off for non-terminal output.

use crate::error::DirectoryError;
use crate::models::Contact;
use crate::services::{MenuChoice, Outcome};
use console::Style;

const RULE_WIDTH: usize = 50;

/// Renders menus, outcomes and errors as text.
#[derive(Debug, Clone, Copy)]
pub struct MenuRenderer {
    color: bool,
}

impl MenuRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn style(&self, style: Style) -> Style {
        style.force_styling(self.color)
    }

    fn banner_style(&self) -> Style {
        self.style(Style::new().cyan().bold())
    }

    fn option_style(&self) -> Style {
        self.style(Style::new().yellow().bold())
    }

    fn prompt_style(&self) -> Style {
        self.style(Style::new().green().bold())
    }

    fn success(&self, text: &str) -> String {
        format!("\n{}\n", self.style(Style::new().green()).apply_to(text))
    }

    /// The banner, numbered options and choice prompt.
    pub fn menu(&self) -> String {
        let rule = "*".repeat(RULE_WIDTH);
        let banner = self.banner_style();
        let option = self.option_style();

        let mut out = format!(
            "\n{}\n{}\n{}\n",
            banner.apply_to(&rule),
            banner.apply_to(format!("{:>30}", " *** PHONE DIRECTORY MENU *** ")),
            banner.apply_to(&rule)
        );
        for choice in MenuChoice::ALL {
            out.push_str(&format!("{}\n", option.apply_to(format!(" {}", choice))));
        }
        out.push_str(&format!(
            "\n{}",
            self.prompt_style().apply_to("How can I assist you? (0-8): ")
        ));
        out
    }

    /// A field prompt such as `Enter name: `.
    pub fn prompt(&self, label: &str) -> String {
        self.prompt_style().apply_to(label).to_string()
    }

    pub fn invalid_choice(&self) -> String {
        "\nInvalid option. Please try again.\n".to_string()
    }

    /// Render a successful outcome.
    pub fn outcome(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Exit => "\nExiting the program.\n".to_string(),
            Outcome::Contacts(contacts) if contacts.is_empty() => {
                "\nNo contacts to display.\n".to_string()
            }
            Outcome::Contacts(contacts) => {
                let mut out = String::from("\n--- Contact List ---\n");
                out.push_str(&contact_lines(contacts));
                out
            }
            Outcome::SearchResults { query, matches } => {
                let mut out = format!("Search results for \"{}\":\n", query);
                if matches.is_empty() {
                    out.push_str("\nNo matching contacts found.\n");
                }
                out.push_str(&contact_lines(matches));
                out
            }
            Outcome::Added(_) => self.success("*** Contact added successfully! ***"),
            Outcome::Updated { .. } => self.success("*** Contact updated successfully! ***"),
            Outcome::Deleted(_) => self.success("*** Contact deleted successfully! ***"),
            Outcome::Sorted(_) => self.success("*** Contacts sorted successfully! ***"),
            // Undoing an add is a delete as far as the user is concerned
            Outcome::Undone(_) => self.success("*** Contact deleted successfully! ***"),
            Outcome::AccessReport(entries) => {
                let mut out = String::from("\nMost Accessed Contacts:\n");
                if entries.is_empty() {
                    out.push_str("No contacts accessed yet.\n");
                }
                for (name, count) in entries {
                    out.push_str(&format!("Name: {}, Access Count: {}\n", name, count));
                }
                out
            }
        }
    }

    /// Render a failed operation.
    pub fn error(&self, err: &DirectoryError) -> String {
        match err {
            DirectoryError::NotFound(_) => "\nContact not found!\n".to_string(),
            DirectoryError::EmptyLog => "\nNo actions to undo.\n".to_string(),
            DirectoryError::UnsupportedUndo { .. } => {
                "\nUndo feature for 'Delete' is not implemented fully.\n".to_string()
            }
        }
    }
}

/// One `Name: .., Phone: ..` line per contact.
fn contact_lines(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(|contact| format!("{}\n", contact))
        .collect()
}
