use crate::domain::{ContactId, ValidationError};
use crate::error::ContactResult;
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory contact repository.
///
/// All contacts live in a `HashMap` behind a single `Mutex`, held for the
/// whole of each operation. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<HashMap<ContactId, Contact>>,
}

impl InMemoryContactRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `contacts`.
    ///
    /// Fails on the first duplicate ID.
    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> ContactResult<Self> {
        let repo = Self::new();
        for contact in contacts {
            repo.create(contact)?;
        }
        Ok(repo)
    }

    // Every write leaves the map consistent before it can panic, so a
    // poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, HashMap<ContactId, Contact>> {
        self.contacts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn get(&self, id: &str) -> Option<Contact> {
        self.lock().get(id).cloned()
    }

    fn list(&self) -> Vec<Contact> {
        let mut contacts: Vec<Contact> = self.lock().values().cloned().collect();
        contacts.sort_by(|a, b| a.id().cmp(b.id()));
        contacts
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn create(&self, contact: Contact) -> ContactResult<()> {
        match self.lock().entry(contact.id().clone()) {
            Entry::Occupied(entry) => {
                Err(ValidationError::DuplicateId(entry.key().to_string()).into())
            }
            Entry::Vacant(entry) => {
                entry.insert(contact);
                Ok(())
            }
        }
    }

    fn update(&self, contact: Contact) -> ContactResult<Contact> {
        match self.lock().get_mut(contact.contact_id()) {
            Some(stored) => Ok(std::mem::replace(stored, contact)),
            None => Err(ValidationError::UnknownId(contact.contact_id().to_string()).into()),
        }
    }

    fn delete(&self, id: &str) -> ContactResult<Contact> {
        self.lock()
            .remove(id)
            .ok_or_else(|| ValidationError::UnknownId(id.to_string()).into())
    }
}
