//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its normalized name, its phone numbers and its birthday. These value
//! objects validate at construction time so an invalid field can never be
//! stored on a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::ContactName;
pub use phone::PhoneNumber;
