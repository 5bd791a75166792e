//! Data models for the address book.
//!
//! This module contains the contact `Record` and the `AddressBook` that owns
//! records keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
