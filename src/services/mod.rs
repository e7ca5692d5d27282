//! Application service layer.
//!
//! Services hold the policy the raw address book leaves to its callers
//! and sit between the command dispatcher and the data model.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};
