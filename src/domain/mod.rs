//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! IDs, names, phone numbers, and addresses. These value objects
//! provide validation at construction time and prevent invalid data from
//! being represented in the system.

pub mod address;
pub mod contact_id;
pub mod errors;
pub mod name;
pub mod phone;

pub use address::Address;
pub use contact_id::ContactId;
pub use errors::{Field, ValidationError};
pub use name::Name;
pub use phone::PhoneNumber;

/// Reject `value` if it is longer than `max` characters.
pub(crate) fn check_max_len(field: Field, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}
