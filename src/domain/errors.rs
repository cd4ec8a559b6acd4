//! Domain validation errors.

use std::fmt;

/// The contact fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ContactId,
    FirstName,
    LastName,
    Phone,
    Address,
}

impl Field {
    /// The snake_case name used in serialized records and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContactId => "contact_id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during domain value object validation or when a
/// directory precondition on a contact ID does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent.
    MissingField(Field),

    /// A field exceeded its maximum length (in characters).
    TooLong { field: Field, max: usize, actual: usize },

    /// A fixed-length field had the wrong length (in characters).
    WrongLength {
        field: Field,
        expected: usize,
        actual: usize,
    },

    /// A digits-only field contained something other than `0`-`9`.
    NonDigit { field: Field, value: String },

    /// A contact with this ID is already stored.
    DuplicateId(String),

    /// No contact with this ID is stored.
    UnknownId(String),
}

impl ValidationError {
    /// The field this error refers to, if it is a field-level error.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::MissingField(field)
            | Self::TooLong { field, .. }
            | Self::WrongLength { field, .. }
            | Self::NonDigit { field, .. } => Some(*field),
            Self::DuplicateId(_) | Self::UnknownId(_) => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} is required", field),
            Self::TooLong { field, max, actual } => write!(
                f,
                "{} must be at most {} characters, got {}",
                field, max, actual
            ),
            Self::WrongLength {
                field,
                expected,
                actual,
            } => write!(
                f,
                "{} must be exactly {} characters, got {}",
                field, expected, actual
            ),
            Self::NonDigit { field, value } => {
                write!(f, "{} must contain only digits: {}", field, value)
            }
            Self::DuplicateId(id) => write!(f, "Contact with ID {} already exists", id),
            Self::UnknownId(id) => write!(f, "Contact {} not found", id),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::TooLong {
            field: Field::FirstName,
            max: 10,
            actual: 18,
        };
        assert_eq!(
            err.to_string(),
            "first_name must be at most 10 characters, got 18"
        );

        let err = ValidationError::MissingField(Field::Address);
        assert_eq!(err.to_string(), "address is required");

        let err = ValidationError::UnknownId("nonexistent".to_string());
        assert_eq!(err.to_string(), "Contact nonexistent not found");
    }

    #[test]
    fn test_validation_error_field() {
        assert_eq!(
            ValidationError::MissingField(Field::Phone).field(),
            Some(Field::Phone)
        );
        assert_eq!(ValidationError::DuplicateId("1".to_string()).field(), None);
    }
}
