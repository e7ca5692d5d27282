//! The address book: contact records keyed by normalized name.

use super::record::ContactRecord;
use crate::domain::ContactName;
use std::collections::HashMap;
use std::fmt;

/// Keyed collection of contact records.
///
/// Records are keyed by their normalized name and iterate in insertion
/// order. Overwriting an existing key keeps the key's original position.
///
/// `add` is a plain upsert. Rejecting a second record under the same name
/// is the caller's policy (see `ContactService::add_contact`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, ContactRecord>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record stored under the same name.
    pub fn add(&mut self, record: ContactRecord) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(&ContactName::normalize(name))
    }

    /// Look up a record for mutation by name, ignoring case.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(&ContactName::normalize(name))
    }

    /// Whether a record exists under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Remove the record stored under `name`. Absent names are ignored.
    pub fn delete(&mut self, name: &str) {
        let key = ContactName::normalize(name);
        if self.records.remove(&key).is_some() {
            self.order.retain(|k| *k != key);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Split the records into pages of `page_size`.
    ///
    /// With `None` or `Some(0)` a single page holding every record is
    /// produced. Otherwise pages hold `page_size` records, the last one
    /// possibly fewer. Every call starts again from the first record.
    pub fn paginate(&self, page_size: Option<usize>) -> Pages<'_> {
        Pages {
            book: self,
            keys: self.order.iter(),
            page_size: page_size.filter(|&n| n > 0),
            finished: false,
        }
    }
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Lazy page iterator returned by [`AddressBook::paginate`].
pub struct Pages<'a> {
    book: &'a AddressBook,
    keys: std::slice::Iter<'a, String>,
    page_size: Option<usize>,
    finished: bool,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a ContactRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let book: &'a AddressBook = self.book;
        let records = &book.records;
        match self.page_size {
            None => {
                self.finished = true;
                Some(self.keys.by_ref().filter_map(|k| records.get(k)).collect())
            }
            Some(size) => {
                let page: Vec<_> = self
                    .keys
                    .by_ref()
                    .take(size)
                    .filter_map(|k| records.get(k))
                    .collect();
                if page.is_empty() {
                    self.finished = true;
                    None
                } else {
                    Some(page)
                }
            }
        }
    }
}
