//! Address Book - an interactive command-line contact manager.
//!
//! Stores named contacts with phone numbers and an optional birthday,
//! persists them to a local file between runs and pages through them on
//! request.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: Contact records and the address book with its page iterator
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the whole book
//! - **services**: Caller-level policy such as duplicate rejection
//! - **commands**: Command parsing, dispatch and the interactive loop

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use commands::{Command, Session};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, ContactRecord, Pages};
pub use repositories::{ContactRepository, JsonFileRepository};
pub use services::{ContactService, ContactServiceImpl};
