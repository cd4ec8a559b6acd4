//! Application service layer.
//!
//! Services contain business logic on top of the repositories. They provide
//! a clean boundary between callers such as the command driver and the
//! data access layer.

mod contact_service;

pub use contact_service::ContactService;
