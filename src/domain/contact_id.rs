//! ContactId value object.

use super::errors::{Field, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// A type-safe wrapper for contact IDs.
///
/// This ensures that contact IDs are validated at construction time:
/// they cannot be empty and cannot exceed [`ContactId::MAX_LEN`] characters.
///
/// # Example
///
/// ```
/// use contact_directory::domain::ContactId;
///
/// let id = ContactId::new("1234567890").unwrap();
/// assert_eq!(id.as_str(), "1234567890");
/// assert!(ContactId::new("12345678901").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    /// Maximum length of a contact ID, in characters.
    pub const MAX_LEN: usize = 10;

    /// Create a new ContactId, validating it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` if the ID is empty and
    /// `ValidationError::TooLong` if it exceeds [`ContactId::MAX_LEN`].
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::MissingField(Field::ContactId));
        }
        super::check_max_len(Field::ContactId, &id, Self::MAX_LEN)?;
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Lets the directory map be queried with a plain &str
impl Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
