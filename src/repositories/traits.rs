use crate::error::ContactResult;
use crate::models::Contact;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval. Each method is
/// atomic with respect to every other call on the same repository: an
/// existence or uniqueness check and the write that depends on it happen
/// under one lock.
pub trait ContactRepository: Send + Sync {
    /// Retrieve a single contact by ID, or `None` if it is not stored.
    fn get(&self, id: &str) -> Option<Contact>;

    /// Retrieve every stored contact, sorted by ID.
    fn list(&self) -> Vec<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    /// Whether the repository holds no contacts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store a new contact.
    ///
    /// Fails with `ValidationError::DuplicateId` if the ID is already stored.
    fn create(&self, contact: Contact) -> ContactResult<()>;

    /// Replace the stored contact with the same ID, returning the old record.
    ///
    /// Fails with `ValidationError::UnknownId` if the ID is not stored.
    fn update(&self, contact: Contact) -> ContactResult<Contact>;

    /// Remove a contact, returning the removed record.
    ///
    /// Fails with `ValidationError::UnknownId` if the ID is not stored.
    fn delete(&self, id: &str) -> ContactResult<Contact>;
}
