//! PhoneNumber value object.

use super::errors::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static PHONE_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Failed to compile phone digits regex"));

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly [`PhoneNumber::LEN`] ASCII digits with no
/// formatting characters.
///
/// # Example
///
/// ```
/// use contact_directory::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(PhoneNumber::new("123-456-7890").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Required length of a phone number, in characters.
    pub const LEN: usize = 10;

    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must be exactly ten characters long
    /// - Every character must be an ASCII digit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::WrongLength` if the length is not ten, and
    /// `ValidationError::NonDigit` if any character is not a digit.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        let actual = phone.chars().count();
        if actual != Self::LEN {
            return Err(ValidationError::WrongLength {
                field: Field::Phone,
                expected: Self::LEN,
                actual,
            });
        }

        if !PHONE_DIGITS.is_match(&phone) {
            return Err(ValidationError::NonDigit {
                field: Field::Phone,
                value: phone,
            });
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_validates_length() {
        assert!(matches!(
            PhoneNumber::new("123456789"),
            Err(ValidationError::WrongLength { actual: 9, .. })
        ));
        assert!(matches!(
            PhoneNumber::new("12345678901"),
            Err(ValidationError::WrongLength { actual: 11, .. })
        ));
        assert!(PhoneNumber::new("").is_err());
    }

    #[test]
    fn test_phone_validates_digits() {
        assert!(matches!(
            PhoneNumber::new("OrderSixty"),
            Err(ValidationError::NonDigit { .. })
        ));
        assert!(PhoneNumber::new("555-123-45").is_err());
        assert!(PhoneNumber::new("+123456789").is_err());
        assert!(PhoneNumber::new("12345 7890").is_err());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(PhoneNumber::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_phone_wrong_length_and_letters_reports_length() {
        assert!(matches!(
            PhoneNumber::new("OrderSixtySix"),
            Err(ValidationError::WrongLength { .. })
        ));
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("0987654321").unwrap();
        assert_eq!(format!("{}", phone), "0987654321");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("0987654321").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0987654321\"");
    }
}
