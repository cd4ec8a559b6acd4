use contact_directory::error::ContactResult;
use contact_directory::models::Contact;
use contact_directory::repositories::ContactRepository;
use contact_directory::ValidationError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a contact to the mock repository without counting a call.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.contact_id().to_string(), contact);
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

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn get(&self, id: &str) -> Option<Contact> {
        self.track_call("get");
        self.contacts.lock().unwrap().get(id).cloned()
    }

    fn list(&self) -> Vec<Contact> {
        self.track_call("list");
        let mut result: Vec<Contact> = self.contacts.lock().unwrap().values().cloned().collect();
        result.sort_by(|a, b| a.contact_id().cmp(b.contact_id()));
        result
    }

    fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn create(&self, contact: Contact) -> ContactResult<()> {
        self.track_call("create");

        let mut contacts = self.contacts.lock().unwrap();

        // Check if contact with this ID already exists
        if contacts.contains_key(contact.contact_id()) {
            return Err(ValidationError::DuplicateId(contact.contact_id().to_string()).into());
        }

        contacts.insert(contact.contact_id().to_string(), contact);
        Ok(())
    }

    fn update(&self, contact: Contact) -> ContactResult<Contact> {
        self.track_call("update");

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.get_mut(contact.contact_id()) {
            Some(stored) => Ok(std::mem::replace(stored, contact)),
            None => Err(ValidationError::UnknownId(contact.contact_id().to_string()).into()),
        }
    }

    fn delete(&self, id: &str) -> ContactResult<Contact> {
        self.track_call("delete");

        let mut contacts = self.contacts.lock().unwrap();
        contacts
            .remove(id)
            .ok_or_else(|| ValidationError::UnknownId(id.to_string()).into())
    }
}
