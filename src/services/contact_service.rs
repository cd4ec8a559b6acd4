//! Contact service layer.
//!
//! Business rules for the contact directory: unique IDs on add, existing IDs
//! on update and delete, and all-or-nothing field updates.

use crate::config::DeletePolicy;
use crate::domain::ValidationError;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactFields};
use crate::observability::{DirectoryMetrics, Timer};
use crate::repositories::{ContactRepository, InMemoryContactRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// In-memory contact directory keyed by contact ID.
///
/// Storage is delegated to a [`ContactRepository`]; [`ContactService::new`]
/// uses an [`InMemoryContactRepository`].
///
/// # Example
///
/// ```
/// use contact_directory::{Contact, ContactService};
///
/// let service = ContactService::new();
/// let contact = Contact::new("1", "Anakin", "Skywalker", "1234567890", "Jedi Temple").unwrap();
/// service.add_contact(contact).unwrap();
///
/// service
///     .update_contact("1", "Luke", "Skywalker", "0987654321", "Dagobah")
///     .unwrap();
/// assert_eq!(service.get_contact("1").unwrap().first_name(), "Luke");
/// ```
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
    delete_policy: DeletePolicy,
    metrics: DirectoryMetrics,
}

impl ContactService {
    /// Create an empty directory with the default (strict) delete policy.
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryContactRepository::new()))
    }

    /// Create a directory backed by `repository`.
    pub fn with_repository(repository: Arc<dyn ContactRepository>) -> Self {
        Self {
            repository,
            delete_policy: DeletePolicy::default(),
            metrics: DirectoryMetrics::new(),
        }
    }

    /// Set what `delete_contact` does for an unknown ID.
    pub fn with_delete_policy(mut self, delete_policy: DeletePolicy) -> Self {
        self.delete_policy = delete_policy;
        self
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    pub fn metrics(&self) -> &DirectoryMetrics {
        &self.metrics
    }

    /// Add a contact.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if a contact with the same ID is already
    /// stored. The stored contact is left unchanged.
    pub fn add_contact(&self, contact: Contact) -> ContactResult<()> {
        let timer = Timer::new("add_contact");
        let contact_id = contact.contact_id().to_string();

        let result = self.repository.create(contact);
        self.record("add_contact", &result, timer);

        if result.is_ok() {
            self.metrics.track_add();
            info!(contact_id = %contact_id, "Contact added");
        }
        result
    }

    /// Look up a contact by ID. A missing ID is not an error.
    pub fn get_contact(&self, contact_id: &str) -> Option<Contact> {
        let contact = self.repository.get(contact_id);
        self.metrics.track_lookup(contact_id, contact.is_some());
        contact
    }

    /// Delete a contact by ID.
    ///
    /// Returns `Ok(true)` if a contact was removed. For an unknown ID the
    /// strict policy fails with `InvalidArgument` and the lenient policy
    /// returns `Ok(false)`.
    pub fn delete_contact(&self, contact_id: &str) -> ContactResult<bool> {
        let timer = Timer::new("delete_contact");

        let result = match self.repository.delete(contact_id) {
            Ok(_) => Ok(true),
            Err(_) if self.delete_policy == DeletePolicy::Lenient => {
                debug!(contact_id = %contact_id, "Delete of unknown contact ignored");
                Ok(false)
            }
            Err(err) => Err(err),
        };
        self.record("delete_contact", &result, timer);

        if let Ok(true) = result {
            self.metrics.track_delete();
            info!(contact_id = %contact_id, "Contact deleted");
        }
        result
    }

    /// Replace the four mutable fields of an existing contact.
    ///
    /// Every field is validated before anything is written, so an invalid
    /// value leaves the stored contact exactly as it was.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if the ID is not stored or any field is
    /// invalid.
    pub fn update_contact(
        &self,
        contact_id: &str,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> ContactResult<()> {
        let timer = Timer::new("update_contact");

        let result = self.apply_update(contact_id, first_name, last_name, phone, address);
        self.record("update_contact", &result, timer);

        if result.is_ok() {
            self.metrics.track_update();
            info!(contact_id = %contact_id, "Contact updated");
        }
        result
    }

    fn apply_update(
        &self,
        contact_id: &str,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> ContactResult<()> {
        // An unknown ID is reported ahead of any field error
        let mut contact = self
            .repository
            .get(contact_id)
            .ok_or_else(|| ContactError::from(ValidationError::UnknownId(contact_id.to_string())))?;

        let fields = ContactFields::new(first_name, last_name, phone, address)?;
        contact.replace_fields(fields);

        // The ID is re-checked under the repository lock in case of a
        // concurrent delete
        self.repository.update(contact).map(|_| ())
    }

    /// All stored contacts, sorted by ID.
    pub fn list_contacts(&self) -> Vec<Contact> {
        self.repository.list()
    }

    pub fn contains(&self, contact_id: &str) -> bool {
        self.repository.get(contact_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    fn record<T>(&self, operation: &'static str, result: &ContactResult<T>, timer: Timer) {
        timer.finish_with_status(result.is_ok());
        if let Err(err) = result {
            self.metrics.track_rejection(operation, &err.to_string());
        }
    }
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    fn anakin() -> Contact {
        Contact::new(
            "1234567890",
            "Anakin",
            "Skywalker",
            "1234567890",
            "123 Jedi Temple Ave",
        )
        .unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let service = ContactService::new();
        service.add_contact(anakin()).unwrap();

        assert_eq!(service.get_contact("1234567890"), Some(anakin()));
        assert!(service.get_contact("nonexistent").is_none());
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_add_duplicate_fails() {
        let service = ContactService::new();
        service.add_contact(anakin()).unwrap();

        let luke = Contact::new(
            "1234567890",
            "Luke",
            "Skywalker",
            "1234567890",
            "456 Dagobah Swamps Ln",
        )
        .unwrap();
        let err = service.add_contact(luke).unwrap_err();
        assert_eq!(
            err.reason(),
            &ValidationError::DuplicateId("1234567890".to_string())
        );
        assert_eq!(service.get_contact("1234567890").unwrap().first_name(), "Anakin");
    }

    #[test]
    fn test_update_unknown_id_reported_before_field_errors() {
        let service = ContactService::new();
        let err = service
            .update_contact("nonexistent", "LukeLukeLuke", "S", "1", "A")
            .unwrap_err();
        assert_eq!(
            err.reason(),
            &ValidationError::UnknownId("nonexistent".to_string())
        );
    }

    #[test]
    fn test_update_is_atomic() {
        let service = ContactService::new();
        service.add_contact(anakin()).unwrap();

        let err = service
            .update_contact("1234567890", "Luke", "Skywalker", "0987654321", "x".repeat(31))
            .unwrap_err();
        assert_eq!(err.reason().field(), Some(Field::Address));
        assert_eq!(service.get_contact("1234567890"), Some(anakin()));
    }

    #[test]
    fn test_delete_policies() {
        let strict = ContactService::new();
        assert!(strict.delete_contact("missing").is_err());

        let lenient = ContactService::new().with_delete_policy(DeletePolicy::Lenient);
        assert_eq!(lenient.delete_contact("missing"), Ok(false));

        lenient.add_contact(anakin()).unwrap();
        assert_eq!(lenient.delete_contact("1234567890"), Ok(true));
        assert!(lenient.is_empty());
    }

    #[test]
    fn test_metrics_track_operations() {
        let service = ContactService::new();
        service.add_contact(anakin()).unwrap();
        let _ = service.add_contact(anakin());
        service.get_contact("1234567890");
        service.get_contact("missing");
        service
            .update_contact("1234567890", "Luke", "Skywalker", "0987654321", "Dagobah")
            .unwrap();
        service.delete_contact("1234567890").unwrap();

        let metrics = service.metrics();
        assert_eq!(metrics.contacts_added_total(), 1);
        assert_eq!(metrics.contacts_updated_total(), 1);
        assert_eq!(metrics.contacts_deleted_total(), 1);
        assert_eq!(metrics.lookups_total(), 2);
        assert_eq!(metrics.lookup_misses_total(), 1);
        assert_eq!(metrics.rejected_total(), 1);
    }

    #[test]
    fn test_service_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ContactService>();
    }
}
