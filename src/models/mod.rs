//! Data models for the address book.
//!
//! This module contains the contact record and the keyed, ordered
//! collection of records with its page iterator.

pub mod book;
pub mod record;

pub use book::{AddressBook, Pages};
pub use record::ContactRecord;
