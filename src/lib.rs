//! Contact Directory - validated contact records and an in-memory directory.
//!
//! A [`Contact`] holds an immutable ID and four mutable fields, each of which
//! is validated on construction and on every change. A [`ContactService`]
//! stores contacts by ID and enforces that IDs are unique on add and present
//! on update and delete.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for each contact field
//! - **models**: The contact record and its unvalidated draft form
//! - **error**: Custom error types for precise error handling
//! - **repositories**: Storage abstraction and the in-memory implementation
//! - **services**: Directory business rules
//! - **observability**: Operation counters and timers
//! - **config**: Configuration management from environment variables
//! - **driver**: JSON-lines command driver used by the binary

pub mod config;
pub mod domain;
pub mod driver;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::{Config, DeletePolicy};
pub use domain::{Field, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::{Contact, ContactDraft, ContactFields};
pub use observability::DirectoryMetrics;
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use services::ContactService;
