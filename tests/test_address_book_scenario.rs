//! End-to-end tests for the address book lifecycle.
//!
//! These tests drive the public API through the full create, read, update
//! and delete cycle and check the text renderings at each step.

mod fixtures;
use fixtures::*;

use address_book::{AddressBook, AddressBookError};

/// Test the complete scenario: list, edit, find phone, delete.
#[test]
fn test_address_book_lifecycle() {
    let mut book = AddressBook::new();
    assert_eq!(book.to_string(), "Address book is empty");

    book.add_record(sample_record("John", &["1234567890", "5555555555"]));
    book.add_record(sample_record("Jane", &["9876543210"]));

    let text = book.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Contact name: John, phones: 1234567890; 5555555555",
            "Contact name: Jane, phones: 9876543210",
        ]
    );

    let john = book.find_mut("John").expect("John should exist");
    john.edit_phone("1234567890", "1112223333").unwrap();
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );

    let john = book.find("John").expect("John should exist");
    let found = john.find_phone("5555555555").expect("phone should exist");
    assert_eq!(found.to_string(), "5555555555");
    assert_eq!(format!("{}: {}", john.name(), found), "John: 5555555555");

    book.delete("Jane").unwrap();
    assert!(book.find("Jane").is_none());
    assert_eq!(book.len(), 1);
    assert_eq!(
        book.to_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );
}

/// Deleting an absent name fails and leaves the book untouched.
#[test]
fn test_delete_missing_record_keeps_entries() {
    let mut book = john_and_jane();
    let before = book.clone();

    let err = book.delete("Bob").unwrap_err();
    assert_eq!(err, AddressBookError::RecordNotFound("Bob".to_string()));
    assert!(err.is_not_found());
    assert_eq!(book.len(), 2);
    assert_eq!(book, before);
}

/// Adding a record under an existing name replaces it in place.
#[test]
fn test_add_record_twice_keeps_one_entry() {
    let mut book = john_and_jane();
    book.add_record(sample_record("John", &["0000000000"]));

    assert_eq!(book.len(), 2);
    let john = book.find("John").unwrap();
    assert_eq!(phone_values(john), vec!["0000000000"]);
    assert_eq!(
        book.iter().next().map(|r| r.name().as_str()),
        Some("John"),
        "replacement should keep the original position"
    );
}

/// Deleting the last record renders the empty message again.
#[test]
fn test_book_empty_after_deleting_all() {
    let mut book = john_and_jane();
    book.delete("John").unwrap();
    book.delete("Jane").unwrap();

    assert!(book.is_empty());
    assert_eq!(book.to_string(), "Address book is empty");
}

/// A JSON snapshot restores an equal book.
#[test]
fn test_book_json_snapshot() {
    let book = john_and_jane();
    let json = serde_json::to_string(&book).unwrap();
    let restored: AddressBook = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, book);
    assert_eq!(restored.to_string(), book.to_string());
}
