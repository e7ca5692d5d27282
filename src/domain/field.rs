//! Shared capability of contact fields.

use std::fmt;

/// A validated value held by a contact record.
///
/// Every field type owns its value independently and renders it through
/// `Display`; this trait only exposes the held value in its natural type
/// (`str` for names and phones, `NaiveDate` for birthdays).
pub trait Field: fmt::Display {
    /// The type of the held value.
    type Value: ?Sized;

    /// Borrow the held value.
    fn value(&self) -> &Self::Value;
}

/// Render a sequence of fields joined by `separator`.
pub fn join<F: Field>(fields: &[F], separator: &str) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
