//! Name value object.

use super::errors::{Field, ValidationError};
use serde::{Serialize, Serializer};
use std::fmt;

/// A first or last name, at most [`Name::MAX_LEN`] characters.
///
/// The field a name belongs to is passed at construction so that a failed
/// validation reports which name was wrong.
///
/// # Example
///
/// ```
/// use contact_directory::domain::{Field, Name};
///
/// let name = Name::new(Field::FirstName, "Anakin").unwrap();
/// assert_eq!(name.as_str(), "Anakin");
/// assert!(Name::new(Field::FirstName, "AnakinAnakinAnakin").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Maximum length of a name, in characters.
    pub const MAX_LEN: usize = 10;

    /// Create a new Name for `field`, validating its length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooLong` if the name exceeds [`Name::MAX_LEN`].
    pub fn new(field: Field, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        super::check_max_len(field, &name, Self::MAX_LEN)?;
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
