//! Contact service layer.
//!
//! Caller-level policy over an [`AddressBook`]: names must exist before they
//! are edited, and adding a name twice is rejected instead of overwriting.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, ContactRecord, Pages};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Contact service trait for address book operations.
pub trait ContactService {
    /// Create a new contact.
    ///
    /// Fails with `Duplicate` if the name is already taken.
    fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<Birthday>,
    ) -> BookResult<&ContactRecord>;

    /// Replace one phone of a contact with another.
    fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<String>;

    /// Get a contact by name.
    fn find_contact(&self, name: &str) -> BookResult<&ContactRecord>;

    /// Delete a contact by name, returning its normalized name.
    fn delete_contact(&mut self, name: &str) -> BookResult<ContactName>;

    /// Append a phone to a contact.
    fn add_phone(&mut self, name: &str, phone: &str) -> BookResult<()>;

    /// Look up one phone of a contact. An unknown phone is `Ok(None)`.
    fn find_phone(&self, name: &str, phone: &str) -> BookResult<Option<&PhoneNumber>>;

    /// Remove one phone from a contact.
    fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<()>;

    /// Set or overwrite a contact's birthday.
    fn set_birthday(&mut self, name: &str, birthday: Birthday) -> BookResult<()>;

    /// Days until a contact's next birthday, counted from `today`.
    fn days_to_birthday_from(&self, name: &str, today: NaiveDate) -> BookResult<u32>;

    /// Days until a contact's next birthday, counted from the local date.
    fn days_to_birthday(&self, name: &str) -> BookResult<u32> {
        self.days_to_birthday_from(name, chrono::Local::now().date_naive())
    }

    /// Page through every contact.
    fn pages(&self, page_size: Option<usize>) -> Pages<'_>;

    /// The underlying address book.
    fn book(&self) -> &AddressBook;
}

/// Default implementation of ContactService.
#[derive(Debug, Default)]
pub struct ContactServiceImpl {
    book: AddressBook,
}

impl ContactServiceImpl {
    /// Create a new contact service over `book`.
    pub fn new(book: AddressBook) -> Self {
        Self { book }
    }

    /// Give the address book back, e.g. to save it.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    fn record(&self, name: &str) -> BookResult<&ContactRecord> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(ContactName::normalize(name)))
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(ContactName::normalize(name)))
    }
}

impl ContactService for ContactServiceImpl {
    fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<Birthday>,
    ) -> BookResult<&ContactRecord> {
        let name = ContactName::new(name)?;
        if self.book.contains(name.as_str()) {
            return Err(BookError::Duplicate(name.into_inner()));
        }

        let mut record = ContactRecord::with_name(name.clone());
        record.add_phone(phone)?;
        if let Some(birthday) = birthday {
            record.set_birthday(birthday);
        }
        self.book.add(record);

        info!(name = %name, "Contact added");
        self.record(name.as_str())
    }

    fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<String> {
        let message = self.record_mut(name)?.edit_phone(old, new)?;
        debug!(name = %name, old = %old, new = %new, "Phone changed");
        Ok(message)
    }

    fn find_contact(&self, name: &str) -> BookResult<&ContactRecord> {
        self.record(name)
    }

    fn delete_contact(&mut self, name: &str) -> BookResult<ContactName> {
        let key = self.record(name)?.name().clone();
        self.book.delete(key.as_str());
        info!(name = %key, "Contact deleted");
        Ok(key)
    }

    fn add_phone(&mut self, name: &str, phone: &str) -> BookResult<()> {
        self.record_mut(name)?.add_phone(phone)?;
        debug!(name = %name, phone = %phone, "Phone added");
        Ok(())
    }

    fn find_phone(&self, name: &str, phone: &str) -> BookResult<Option<&PhoneNumber>> {
        Ok(self.record(name)?.find_phone(phone))
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<()> {
        self.record_mut(name)?.remove_phone(phone)?;
        debug!(name = %name, phone = %phone, "Phone removed");
        Ok(())
    }

    fn set_birthday(&mut self, name: &str, birthday: Birthday) -> BookResult<()> {
        self.record_mut(name)?.set_birthday(birthday);
        debug!(name = %name, birthday = %birthday, "Birthday set");
        Ok(())
    }

    fn days_to_birthday_from(&self, name: &str, today: NaiveDate) -> BookResult<u32> {
        self.record(name)?.days_to_birthday_from(today)
    }

    fn pages(&self, page_size: Option<usize>) -> Pages<'_> {
        self.book.paginate(page_size)
    }

    fn book(&self) -> &AddressBook {
        &self.book
    }
}
