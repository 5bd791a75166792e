//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable builders for records and address books.

use address_book::{AddressBook, Record};

/// Create a record with the given name and phones.
///
/// # Panics
/// Panics if the name or any phone is invalid or duplicated.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("valid fixture name");
    for phone in phones {
        record.add_phone(*phone).expect("valid fixture phone");
    }
    record
}

/// Create the two-record book used by the end-to-end scenario.
#[allow(dead_code)]
pub fn john_and_jane() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890", "5555555555"]));
    book.add_record(sample_record("Jane", &["9876543210"]));
    book
}

/// Collect the phone values of a record in order.
#[allow(dead_code)]
pub fn phone_values(record: &Record) -> Vec<String> {
    record.phones().iter().map(|p| p.to_string()).collect()
}
