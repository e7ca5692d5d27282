//! Command-line dispatcher for the address book.
//!
//! A line of input is parsed into a [`Command`], executed against the
//! contact service by the handlers, and the reply is printed by the
//! [`Session`] loop, which also saves the book when the user leaves.

pub mod handlers;
pub mod parser;
pub mod session;

pub use handlers::{error_message, execute, help_text, Reply};
pub use parser::{Command, VERBS};
pub use session::Session;
