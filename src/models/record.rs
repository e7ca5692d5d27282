//! Contact record: a name, its phone numbers and an optional birthday.

use crate::domain::{field, Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry of the address book.
///
/// The name is fixed for the lifetime of the record; renaming means deleting
/// the record and creating a new one. Every stored phone has passed
/// [`PhoneNumber`] validation. Duplicate phones are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with an optional first phone and birthday.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if the name is empty or the phone is
    /// not ten digits.
    pub fn new(
        name: impl AsRef<str>,
        phone: Option<&str>,
        birthday: Option<Birthday>,
    ) -> BookResult<Self> {
        let mut record = Self::with_name(ContactName::new(name)?);
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        record.birthday = birthday;
        Ok(record)
    }

    /// Create an empty record for an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Append a phone number. No duplicate check is made.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// `new` is validated before the lookup, so an invalid replacement fails
    /// with `Validation` even when `old` is absent.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if `new` is not a valid phone
    /// - `BookError::PhoneNotFound` if no phone equals `old`
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<String> {
        let replacement = PhoneNumber::new(new)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        *slot = replacement;
        Ok(format!("Phone {} changed to phone {}", old, new))
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` and leaves the phones untouched
    /// when there is no match.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let idx = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(idx);
        Ok(())
    }

    /// Set or overwrite the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days until the next birthday, counted from the local date.
    ///
    /// # Errors
    ///
    /// Returns `BookError::MissingBirthday` when no birthday is set.
    pub fn days_to_birthday(&self) -> BookResult<u32> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// A birthday falling on `today` is reported a full year away.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> BookResult<u32> {
        self.birthday
            .map(|b| b.days_until_next(today))
            .ok_or_else(|| BookError::MissingBirthday(self.name.to_string()))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            field::join(&self.phones, "; ")
        )?;
        if let Some(birthday) = self.birthday {
            write!(f, "{}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn phones(record: &ContactRecord) -> Vec<&str> {
        record.phones().iter().map(|p| p.as_str()).collect()
    }

    #[test]
    fn test_record_new() {
        let record = ContactRecord::new("Alice", Some("1234567890"), None).unwrap();
        assert_eq!(record.name().as_str(), "alice");
        assert_eq!(phones(&record), vec!["1234567890"]);
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_new_without_phone() {
        let record = ContactRecord::new("bob", None, None).unwrap();
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_record_new_invalid_phone() {
        let result = ContactRecord::new("alice", Some("12345"), None);
        assert_eq!(
            result,
            Err(BookError::Validation(ValidationError::InvalidPhone(
                "12345".to_string()
            )))
        );
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = ContactRecord::new("alice", Some("1234567890"), None).unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
        assert!(record.add_phone("abc").is_err());
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_edit_phone_scenario() {
        let mut record = ContactRecord::new("alice", Some("1234567890"), None).unwrap();
        record.add_phone("0987654321").unwrap();
        let message = record.edit_phone("1234567890", "1112223333").unwrap();
        assert_eq!(message, "Phone 1234567890 changed to phone 1112223333");
        assert_eq!(phones(&record), vec!["1112223333", "0987654321"]);
        assert!(record.find_phone("1112223333").is_some());
        assert!(record.find_phone("1234567890").is_none());
    }

    #[test]
    fn test_edit_phone_replaces_first_match_only() {
        let mut record = ContactRecord::new("alice", Some("1111111111"), None).unwrap();
        record.add_phone("1111111111").unwrap();
        record.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(phones(&record), vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_edit_phone_not_found() {
        let mut record = ContactRecord::new("alice", Some("1234567890"), None).unwrap();
        let result = record.edit_phone("0000000000", "1112223333");
        assert_eq!(result, Err(BookError::PhoneNotFound("0000000000".to_string())));
        assert_eq!(phones(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_edit_phone_invalid_replacement() {
        let mut record = ContactRecord::new("alice", Some("1234567890"), None).unwrap();
        let result = record.edit_phone("1234567890", "bad");
        assert!(matches!(result, Err(BookError::Validation(_))));
        assert_eq!(phones(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_remove_phone() {
        let mut record = ContactRecord::new("alice", Some("1111111111"), None).unwrap();
        record.add_phone("2222222222").unwrap();
        record.remove_phone("1111111111").unwrap();
        assert_eq!(phones(&record), vec!["2222222222"]);
    }

    #[test]
    fn test_remove_missing_phone_leaves_phones_unchanged() {
        let mut record = ContactRecord::new("alice", Some("1111111111"), None).unwrap();
        record.add_phone("2222222222").unwrap();
        let result = record.remove_phone("3333333333");
        assert_eq!(result, Err(BookError::PhoneNotFound("3333333333".to_string())));
        assert_eq!(phones(&record), vec!["1111111111", "2222222222"]);
    }

    #[test]
    fn test_days_to_birthday_missing() {
        let record = ContactRecord::new("alice", None, None).unwrap();
        assert_eq!(
            record.days_to_birthday(),
            Err(BookError::MissingBirthday("alice".to_string()))
        );
    }

    #[test]
    fn test_days_to_birthday_boundaries() {
        let today = date(2025, 6, 10);
        let mut record = ContactRecord::new("alice", None, None).unwrap();

        record.set_birthday(Birthday::new(date(1990, 6, 10)));
        assert_eq!(record.days_to_birthday_from(today), Ok(365));

        record.set_birthday(Birthday::new(date(1990, 6, 11)));
        assert_eq!(record.days_to_birthday_from(today), Ok(1));

        record.set_birthday(Birthday::new(date(1990, 6, 9)));
        assert_eq!(record.days_to_birthday_from(today), Ok(364));
    }

    #[test]
    fn test_days_to_birthday_today_is_full_year() {
        let today = Local::now().date_naive();
        let record = ContactRecord::new("alice", None, Some(Birthday::new(today))).unwrap();
        let days = record.days_to_birthday().unwrap();
        assert!(days == 365 || days == 366, "got {}", days);
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut record =
            ContactRecord::new("alice", None, Some(Birthday::new(date(1990, 1, 1)))).unwrap();
        record.set_birthday(Birthday::new(date(1991, 2, 2)));
        assert_eq!(record.birthday(), Some(Birthday::new(date(1991, 2, 2))));
    }

    #[test]
    fn test_display() {
        let mut record = ContactRecord::new("alice", Some("1234567890"), None).unwrap();
        record.add_phone("0987654321").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: alice, phones: 1234567890; 0987654321, birthday: "
        );

        record.set_birthday(Birthday::new(date(1990, 3, 15)));
        assert_eq!(
            record.to_string(),
            "Contact name: alice, phones: 1234567890; 0987654321, birthday: 1990-03-15"
        );
    }

    #[test]
    fn test_deserialization_revalidates_phones() {
        let json = r#"{"name":"alice","phones":["123"],"birthday":null}"#;
        let result: Result<ContactRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
