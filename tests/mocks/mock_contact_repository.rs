use phone_directory::error::DirectoryResult;
use phone_directory::models::Contact;
use phone_directory::repositories::{ContactRepository, ContactStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Delegates storage to a real `ContactStore` and tracks method calls for
/// verification. Clones share the call counts, so a test can keep one
/// handle while the service owns another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    inner: ContactStore,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository preloaded with contacts, without counting calls.
    pub fn with_contacts(contacts: &[(&str, &str)]) -> Self {
        let mut repo = Self::new();
        for (name, phone) in contacts {
            repo.inner.add(name, phone);
        }
        repo
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&mut self, name: &str, phone: &str) -> Contact {
        self.track_call("add");
        self.inner.add(name, phone)
    }

    fn find_by_exact_name(&self, name: &str) -> Option<&Contact> {
        self.track_call("find_by_exact_name");
        self.inner.find_by_exact_name(name)
    }

    fn search_by_substring(&self, query: &str) -> Vec<Contact> {
        self.track_call("search_by_substring");
        self.inner.search_by_substring(query)
    }

    fn update(&mut self, name: &str, new_name: &str, new_phone: &str) -> DirectoryResult<Contact> {
        self.track_call("update");
        self.inner.update(name, new_name, new_phone)
    }

    fn delete(&mut self, name: &str) -> DirectoryResult<Contact> {
        self.track_call("delete");
        self.inner.delete(name)
    }

    fn sort_ascending_by_name(&mut self) {
        self.track_call("sort_ascending_by_name");
        self.inner.sort_ascending_by_name()
    }

    fn list_all(&self) -> Vec<Contact> {
        self.track_call("list_all");
        self.inner.list_all()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
