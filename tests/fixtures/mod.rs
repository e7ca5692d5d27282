//! Shared builders for integration tests.

use address_book::models::{AddressBook, ContactRecord};
use address_book::Birthday;

/// A record with the given name and phones.
pub fn record(name: &str, phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new(name, None, None).expect("valid name");
    for phone in phones {
        record.add_phone(phone).expect("valid phone");
    }
    record
}

/// Five contacts in a known order, one of them with a birthday.
pub fn five_contacts() -> AddressBook {
    let mut alice = record("alice", &["1234567890", "0987654321"]);
    alice.set_birthday(Birthday::from_ymd(1990, 3, 15).expect("valid date"));

    [
        alice,
        record("bob", &["1111111111"]),
        record("carol", &[]),
        record("dave", &["2222222222"]),
        record("erin", &["3333333333", "3333333333"]),
    ]
    .into_iter()
    .collect()
}

/// Names of the records in iteration order.
#[allow(dead_code)]
pub fn names(book: &AddressBook) -> Vec<String> {
    book.iter().map(|r| r.name().to_string()).collect()
}
