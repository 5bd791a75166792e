//! Address Book - an in-memory contact directory.
//!
//! Records hold a validated name and an ordered list of unique 10-digit phone
//! numbers. The address book owns records keyed by their name.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names and phone numbers
//! - **models**: The contact record and the address book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **demo**: Demonstration scenario used by the binary

pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod models;

pub use config::{Config, OutputFormat};
pub use domain::{Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError, DemoError};
pub use models::{AddressBook, Record};
