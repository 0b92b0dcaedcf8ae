//! Directory service layer.
//!
//! Orchestrates the contact store, access tracker and undo log behind the
//! eight user-facing operations.

use crate::config::Config;
use crate::error::DirectoryResult;
use crate::models::Contact;
use crate::repositories::{ContactRepository, ContactStore};
use crate::services::command::{Command, Outcome};
use crate::tracking::AccessTracker;
use crate::undo::{UndoLog, DEFAULT_UNDO_DEPTH};
use std::collections::HashMap;

/// Directory service trait for the menu operations.
pub trait DirectoryService: Send {
    /// All contacts in current order.
    fn view(&self) -> Vec<Contact>;

    /// Contacts whose name or phone contains `query`.
    ///
    /// Every match counts as an access.
    fn search(&mut self, query: &str) -> Vec<Contact>;

    /// Insert a contact in sorted position.
    ///
    /// Records the add for undo, then counts one access for the new name.
    fn add(&mut self, name: &str, phone: &str) -> Contact;

    /// Replace the name and phone of the first contact named `name`.
    ///
    /// Returns the previous value. Does not re-sort.
    fn edit(&mut self, name: &str, new_name: &str, new_phone: &str) -> DirectoryResult<Contact>;

    /// Remove the first contact named `name`.
    fn delete(&mut self, name: &str) -> DirectoryResult<Contact>;

    /// Re-sort all contacts by name. Returns the number of contacts.
    fn sort(&mut self) -> usize;

    /// Reverse the most recent add or delete.
    fn undo(&mut self) -> DirectoryResult<Contact>;

    /// Access counts per name, in unspecified order.
    fn report(&self) -> HashMap<String, u64>;

    /// Access counts, most accessed first.
    fn most_accessed(&self) -> Vec<(String, u64)>;

    /// First contact named exactly `name`, without touching access counts.
    fn find(&self, name: &str) -> Option<Contact>;

    /// Current access count for `name`.
    fn access_count(&self, name: &str) -> u64;

    /// Dispatch a parsed command to the matching operation.
    fn execute(&mut self, command: Command) -> DirectoryResult<Outcome> {
        let outcome = match command {
            Command::Exit => Outcome::Exit,
            Command::View => Outcome::Contacts(self.view()),
            Command::Search { query } => {
                let matches = self.search(&query);
                Outcome::SearchResults { query, matches }
            }
            Command::Add { name, phone } => Outcome::Added(self.add(&name, &phone)),
            Command::Edit {
                name,
                new_name,
                new_phone,
            } => {
                let previous = self.edit(&name, &new_name, &new_phone)?;
                Outcome::Updated {
                    previous,
                    current: Contact::new(new_name, new_phone),
                }
            }
            Command::Delete { name } => Outcome::Deleted(self.delete(&name)?),
            Command::Sort => Outcome::Sorted(self.sort()),
            Command::Undo => Outcome::Undone(self.undo()?),
            Command::Report => Outcome::AccessReport(self.most_accessed()),
        };
        Ok(outcome)
    }
}

/// Default implementation of DirectoryService.
pub struct DirectoryServiceImpl {
    store: Box<dyn ContactRepository>,
    tracker: AccessTracker,
    undo_log: UndoLog,
}

impl DirectoryServiceImpl {
    /// Create a new directory service over `store`.
    pub fn new(store: Box<dyn ContactRepository>, undo_depth: usize) -> Self {
        Self {
            store,
            tracker: AccessTracker::new(),
            undo_log: UndoLog::with_capacity(undo_depth),
        }
    }

    /// Create an empty in-memory directory using configured limits.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Box::new(ContactStore::new()), config.undo_depth)
    }

    /// Number of actions currently available to undo.
    pub fn pending_undo_count(&self) -> usize {
        self.undo_log.len()
    }
}

impl Default for DirectoryServiceImpl {
    fn default() -> Self {
        Self::new(Box::new(ContactStore::new()), DEFAULT_UNDO_DEPTH)
    }
}

impl DirectoryService for DirectoryServiceImpl {
    fn view(&self) -> Vec<Contact> {
        let contacts = self.store.list_all();
        tracing::debug!(count = contacts.len(), "Listing contacts");
        contacts
    }

    fn search(&mut self, query: &str) -> Vec<Contact> {
        let matches = self.store.search_by_substring(query);
        for contact in &matches {
            self.tracker.record_access(&contact.name);
        }

        tracing::debug!(query = %query, result_count = matches.len(), "Search completed");
        matches
    }

    fn add(&mut self, name: &str, phone: &str) -> Contact {
        let contact = self.store.add(name, phone);
        self.undo_log.record_add(name);
        self.tracker.record_access(name);

        tracing::info!(name = %name, total = self.store.len(), "Contact added");
        contact
    }

    fn edit(&mut self, name: &str, new_name: &str, new_phone: &str) -> DirectoryResult<Contact> {
        let previous = self
            .store
            .update(name, new_name, new_phone)
            .inspect_err(|e| tracing::warn!(name = %name, "Edit failed: {}", e))?;

        tracing::info!(name = %name, new_name = %new_name, "Contact updated");
        Ok(previous)
    }

    fn delete(&mut self, name: &str) -> DirectoryResult<Contact> {
        let removed = self
            .store
            .delete(name)
            .inspect_err(|e| tracing::warn!(name = %name, "Delete failed: {}", e))?;
        self.undo_log.record_delete(name);
        self.tracker.record_access(name);

        tracing::info!(name = %name, total = self.store.len(), "Contact deleted");
        Ok(removed)
    }

    fn sort(&mut self) -> usize {
        self.store.sort_ascending_by_name();
        let count = self.store.len();

        tracing::info!(count = count, "Contacts sorted");
        count
    }

    fn undo(&mut self) -> DirectoryResult<Contact> {
        let removed = self
            .undo_log
            .undo(self.store.as_mut(), &mut self.tracker)
            .inspect_err(|e| tracing::warn!("Undo failed: {}", e))?;

        tracing::info!(name = %removed.name, "Add undone");
        Ok(removed)
    }

    fn report(&self) -> HashMap<String, u64> {
        self.tracker.report()
    }

    fn most_accessed(&self) -> Vec<(String, u64)> {
        self.tracker.ranked()
    }

    fn find(&self, name: &str) -> Option<Contact> {
        self.store.find_by_exact_name(name).cloned()
    }

    fn access_count(&self, name: &str) -> u64 {
        self.tracker.count(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;

    fn names(service: &DirectoryServiceImpl) -> Vec<String> {
        service.view().into_iter().map(|c| c.name).collect()
    }

    #[test]
    fn test_directory_service_creation() {
        let service = DirectoryServiceImpl::from_config(&Config::default());
        assert!(service.view().is_empty());
        assert!(service.report().is_empty());
        assert_eq!(service.pending_undo_count(), 0);
    }

    #[test]
    fn test_from_config_with_very_large_undo_depth() {
        let config = Config {
            undo_depth: usize::MAX,
            ..Config::default()
        };
        let mut service = DirectoryServiceImpl::from_config(&config);
        service.add("Ann", "555");
        assert_eq!(service.pending_undo_count(), 1);

        assert_eq!(service.undo().unwrap(), Contact::new("Ann", "555"));
        assert!(service.view().is_empty());
    }

    #[test]
    fn test_add_then_find_has_one_access() {
        let mut service = DirectoryServiceImpl::default();
        service.add("Ann", "555");

        assert_eq!(service.find("Ann"), Some(Contact::new("Ann", "555")));
        assert_eq!(service.access_count("Ann"), 1);
        assert_eq!(service.pending_undo_count(), 1);
    }

    #[test]
    fn test_search_records_access_per_match() {
        let mut service = DirectoryServiceImpl::default();
        service.add("Ann", "555");
        service.add("Bo", "123");

        let matches = service.search("55");
        assert_eq!(matches, vec![Contact::new("Ann", "555")]);
        assert_eq!(service.access_count("Ann"), 2);
        assert_eq!(service.access_count("Bo"), 1);
    }

    #[test]
    fn test_empty_search_touches_nothing() {
        let mut service = DirectoryServiceImpl::default();
        service.add("Ann", "555");

        assert!(service.search("zzz").is_empty());
        assert_eq!(service.report().len(), 1);
    }

    #[test]
    fn test_delete_records_access_and_undo() {
        let mut service = DirectoryServiceImpl::default();
        service.add("Ann", "555");
        service.add("Bo", "123");

        let removed = service.delete("Ann").unwrap();
        assert_eq!(removed.name, "Ann");
        assert!(service.find("Ann").is_none());
        assert_eq!(service.view().len(), 1);
        assert_eq!(service.access_count("Ann"), 2);
        assert_eq!(service.pending_undo_count(), 3);
    }

    #[test]
    fn test_failed_delete_changes_nothing() {
        let mut service = DirectoryServiceImpl::default();
        service.add("Ann", "555");

        let err = service.delete("Zed").unwrap_err();
        assert_eq!(err, DirectoryError::NotFound("Zed".to_string()));
        assert_eq!(service.pending_undo_count(), 1);
        assert_eq!(service.access_count("Zed"), 0);
    }

    #[test]
    fn test_edit_does_not_touch_tracker_or_log() {
        let mut service = DirectoryServiceImpl::default();
        service.add("Ann", "1");
        service.add("Bo", "2");

        let previous = service.edit("Ann", "Zoe", "9").unwrap();
        assert_eq!(previous, Contact::new("Ann", "1"));
        assert_eq!(names(&service), vec!["Zoe", "Bo"]);
        assert_eq!(service.access_count("Zoe"), 0);
        assert_eq!(service.pending_undo_count(), 2);

        assert_eq!(service.sort(), 2);
        assert_eq!(names(&service), vec!["Bo", "Zoe"]);
    }

    #[test]
    fn test_undo_add_then_empty_log() {
        let mut service = DirectoryServiceImpl::default();
        service.add("Bob", "111");

        let removed = service.undo().unwrap();
        assert_eq!(removed, Contact::new("Bob", "111"));
        assert!(service.find("Bob").is_none());
        assert_eq!(service.undo().unwrap_err(), DirectoryError::EmptyLog);
    }

    #[test]
    fn test_undo_delete_is_unsupported() {
        let mut service = DirectoryServiceImpl::default();
        service.add("Alice", "1");
        service.delete("Alice").unwrap();

        let err = service.undo().unwrap_err();
        assert_eq!(
            err,
            DirectoryError::UnsupportedUndo {
                name: "Alice".to_string()
            }
        );
        assert!(service.find("Alice").is_none());
    }

    #[test]
    fn test_counts_survive_delete() {
        let mut service = DirectoryServiceImpl::default();
        service.add("Ann", "1");
        service.delete("Ann").unwrap();

        assert_eq!(service.report().get("Ann"), Some(&2));
        assert_eq!(service.most_accessed(), vec![("Ann".to_string(), 2)]);
    }

    #[test]
    fn test_execute_dispatches_commands() {
        let mut service = DirectoryServiceImpl::default();

        let outcome = service
            .execute(Command::Add {
                name: "Ann".to_string(),
                phone: "555".to_string(),
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Added(Contact::new("Ann", "555")));

        let outcome = service
            .execute(Command::Edit {
                name: "Ann".to_string(),
                new_name: "Anna".to_string(),
                new_phone: "556".to_string(),
            })
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Updated {
                previous: Contact::new("Ann", "555"),
                current: Contact::new("Anna", "556"),
            }
        );

        let outcome = service
            .execute(Command::Search {
                query: "An".to_string(),
            })
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::SearchResults {
                query: "An".to_string(),
                matches: vec![Contact::new("Anna", "556")],
            }
        );

        assert_eq!(service.execute(Command::Sort).unwrap(), Outcome::Sorted(1));
        assert_eq!(service.execute(Command::Exit).unwrap(), Outcome::Exit);
        assert_eq!(
            service.execute(Command::Report).unwrap(),
            Outcome::AccessReport(vec![("Ann".to_string(), 1), ("Anna".to_string(), 1)])
        );

        let err = service
            .execute(Command::Delete {
                name: "Ann".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, DirectoryError::NotFound("Ann".to_string()));
    }
}
