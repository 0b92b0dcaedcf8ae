use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;

/// In-memory ordered contact collection.
///
/// Contacts are kept in a `Vec` ordered by name ascending after every `add`
/// and `sort_ascending_by_name`. `update` may leave the sequence unsorted
/// until the next sort.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name == name)
    }
}

impl ContactRepository for ContactStore {
    fn add(&mut self, name: &str, phone: &str) -> Contact {
        let contact = Contact::new(name, phone);

        // Linear scan: the sequence may be unsorted after an update.
        let index = self
            .contacts
            .iter()
            .position(|c| c.name.as_str() >= name)
            .unwrap_or(self.contacts.len());

        self.contacts.insert(index, contact.clone());
        contact
    }

    fn find_by_exact_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    fn search_by_substring(&self, query: &str) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|c| c.matches(query))
            .cloned()
            .collect()
    }

    fn update(&mut self, name: &str, new_name: &str, new_phone: &str) -> DirectoryResult<Contact> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))?;

        Ok(std::mem::replace(contact, Contact::new(new_name, new_phone)))
    }

    fn delete(&mut self, name: &str) -> DirectoryResult<Contact> {
        let index = self
            .position_of(name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))?;

        Ok(self.contacts.remove(index))
    }

    fn sort_ascending_by_name(&mut self) {
        self.contacts.sort_by(|a, b| a.name.cmp(&b.name));
    }

    fn list_all(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
