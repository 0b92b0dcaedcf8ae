use crate::error::DirectoryResult;
use crate::models::Contact;

/// Repository for managing contacts.
///
/// Provides abstraction over the ordered contact collection, enabling
/// different implementations (in-memory store, call-counting mock).
/// Name-based operations always act on the first exact, case-sensitive match.
pub trait ContactRepository: Send + Sync {
    /// Insert a contact before the first entry whose name is not less than it.
    fn add(&mut self, name: &str, phone: &str) -> Contact;

    /// Find the first contact whose name equals `name` exactly.
    fn find_by_exact_name(&self, name: &str) -> Option<&Contact>;

    /// Contacts whose name or phone contains `query`, in store order.
    fn search_by_substring(&self, query: &str) -> Vec<Contact>;

    /// Replace both fields of the first contact named `name`.
    ///
    /// Returns the replaced value. The sequence is not re-sorted.
    fn update(&mut self, name: &str, new_name: &str, new_phone: &str) -> DirectoryResult<Contact>;

    /// Remove the first contact named `name` and return it.
    fn delete(&mut self, name: &str) -> DirectoryResult<Contact>;

    /// Stable re-sort of the whole sequence by name, ascending.
    fn sort_ascending_by_name(&mut self);

    /// Snapshot of all contacts in current order.
    fn list_all(&self) -> Vec<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    /// Whether the store holds no contacts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
