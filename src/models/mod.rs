//! Data models for the contact directory.
//!
//! This module contains the contact record and the unvalidated draft used to
//! carry possibly-absent input into it.

pub mod contact;

pub use contact::{Contact, ContactDraft, ContactFields};
