//! Address value object.

use super::errors::{Field, ValidationError};
use serde::{Serialize, Serializer};
use std::fmt;

/// A postal address line, at most [`Address::MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Maximum length of an address, in characters.
    pub const MAX_LEN: usize = 30;

    /// Create a new Address, validating its length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooLong` if the address exceeds
    /// [`Address::MAX_LEN`].
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        super::check_max_len(Field::Address, &address, Self::MAX_LEN)?;
        Ok(Self(address))
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
