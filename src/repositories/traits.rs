//! Repository trait for loading and saving the address book.

use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// Provides abstraction over where the book lives between runs,
/// enabling different implementations (file, in-memory mock).
/// Both operations move the whole book; there is no partial persistence.
pub trait ContactRepository {
    /// Load the stored book, or an empty one when nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
