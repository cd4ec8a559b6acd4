//! Contact model representing a person in the directory.

use crate::domain::{Address, ContactId, Field, Name, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four mutable fields of a contact, already validated.
///
/// Building this first and then swapping it into a [`Contact`] is what makes
/// a multi-field update all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub first_name: Name,
    pub last_name: Name,
    pub phone: PhoneNumber,
    pub address: Address,
}

impl ContactFields {
    /// Validate all four mutable fields.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> ContactResult<Self> {
        Ok(Self {
            first_name: Name::new(Field::FirstName, first_name)?,
            last_name: Name::new(Field::LastName, last_name)?,
            phone: PhoneNumber::new(phone)?,
            address: Address::new(address)?,
        })
    }
}

/// A contact in the directory.
///
/// The ID is fixed at construction. The other fields can be changed through
/// setters, each of which validates before touching the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactDraft")]
pub struct Contact {
    contact_id: ContactId,
    #[serde(flatten)]
    fields: ContactFields,
}

impl Contact {
    /// Create a new contact, validating every field.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidArgument` for the first field that breaks
    /// its rule.
    ///
    /// # Example
    ///
    /// ```
    /// use contact_directory::Contact;
    ///
    /// let contact = Contact::new(
    ///     "1234567890",
    ///     "Anakin",
    ///     "Skywalker",
    ///     "1234567890",
    ///     "123 Jedi Temple Ave",
    /// )
    /// .unwrap();
    /// assert_eq!(contact.first_name(), "Anakin");
    /// ```
    pub fn new(
        contact_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> ContactResult<Self> {
        let contact_id = ContactId::new(contact_id)?;
        let fields = ContactFields::new(first_name, last_name, phone, address)?;
        Ok(Self::from_parts(contact_id, fields))
    }

    /// Assemble a contact from already-validated parts.
    pub fn from_parts(contact_id: ContactId, fields: ContactFields) -> Self {
        Self { contact_id, fields }
    }

    pub fn contact_id(&self) -> &str {
        self.contact_id.as_str()
    }

    /// The typed ID, for use as a map key.
    pub fn id(&self) -> &ContactId {
        &self.contact_id
    }

    pub fn first_name(&self) -> &str {
        self.fields.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.fields.last_name.as_str()
    }

    pub fn phone(&self) -> &str {
        self.fields.phone.as_str()
    }

    pub fn address(&self) -> &str {
        self.fields.address.as_str()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Replace the first name. The contact is unchanged on error.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> ContactResult<()> {
        self.fields.first_name = Name::new(Field::FirstName, first_name)?;
        Ok(())
    }

    /// Replace the last name. The contact is unchanged on error.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> ContactResult<()> {
        self.fields.last_name = Name::new(Field::LastName, last_name)?;
        Ok(())
    }

    /// Replace the phone number. The contact is unchanged on error.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> ContactResult<()> {
        self.fields.phone = PhoneNumber::new(phone)?;
        Ok(())
    }

    /// Replace the address. The contact is unchanged on error.
    pub fn set_address(&mut self, address: impl Into<String>) -> ContactResult<()> {
        self.fields.address = Address::new(address)?;
        Ok(())
    }

    /// Replace all four mutable fields at once.
    pub fn replace_fields(&mut self, fields: ContactFields) {
        self.fields = fields;
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}, {}, {}",
            self.contact_id,
            self.fields.first_name,
            self.fields.last_name,
            self.fields.phone,
            self.fields.address
        )
    }
}

/// Unvalidated contact input.
///
/// Each field may be absent, which is how a missing value reaches the
/// directory from JSON or any other loosely-typed source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub contact_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ContactDraft {
    /// A draft with every field present.
    pub fn new(
        contact_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            contact_id: Some(contact_id.into()),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone: Some(phone.into()),
            address: Some(address.into()),
        }
    }
}

/// Take a required value out of an optional one.
pub(crate) fn require(value: Option<String>, field: Field) -> ContactResult<String> {
    value.ok_or_else(|| ContactError::missing(field))
}

impl TryFrom<ContactDraft> for Contact {
    type Error = ContactError;

    fn try_from(draft: ContactDraft) -> ContactResult<Self> {
        let contact_id = ContactId::new(require(draft.contact_id, Field::ContactId)?)?;
        let fields = ContactFields::new(
            require(draft.first_name, Field::FirstName)?,
            require(draft.last_name, Field::LastName)?,
            require(draft.phone, Field::Phone)?,
            require(draft.address, Field::Address)?,
        )?;
        Ok(Self::from_parts(contact_id, fields))
    }
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        Self::new(
            contact.contact_id(),
            contact.first_name(),
            contact.last_name(),
            contact.phone(),
            contact.address(),
        )
    }
}
