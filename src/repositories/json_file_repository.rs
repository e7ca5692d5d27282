//! JSON file persistence for the address book.

use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, ContactRecord};
use crate::repositories::traits::ContactRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk shape of the address book.
///
/// Records are stored as a list so their order survives the round-trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredBook {
    #[serde(default)]
    pub records: Vec<ContactRecord>,
}

impl From<&AddressBook> for StoredBook {
    fn from(book: &AddressBook) -> Self {
        Self {
            records: book.iter().cloned().collect(),
        }
    }
}

impl From<StoredBook> for AddressBook {
    fn from(stored: StoredBook) -> Self {
        stored.records.into_iter().collect()
    }
}

/// Contact repository backed by a single JSON file.
///
/// Saving writes a sibling temporary file first and renames it over the
/// target, so an interrupted save never leaves a truncated book behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl ContactRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        let stored: StoredBook = serde_json::from_str(&raw)?;
        let book = AddressBook::from(stored);
        info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&StoredBook::from(book))?;
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| self.io_error(&temp, e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(&self.path, e));
        }

        debug!(path = %self.path.display(), records = book.len(), "Address book saved");
        Ok(())
    }
}
