//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by record and address book mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A name or phone candidate failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone is already present on the record
    #[error("Phone {0} already exists")]
    DuplicatePhone(String),

    /// The phone is not present on the record
    #[error("Phone {0} not found")]
    PhoneNotFound(String),

    /// No record is stored under the name
    #[error("Record {0} not found")]
    RecordNotFound(String),
}

impl AddressBookError {
    /// True for malformed name or phone input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True when adding a phone value already present on the record.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicatePhone(_))
    }

    /// True for a missing phone or a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PhoneNotFound(_) | Self::RecordNotFound(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that can occur while writing the demonstration report.
#[derive(Error, Debug)]
pub enum DemoError {
    /// An address book operation in the scenario failed
    #[error("Address book error: {0}")]
    AddressBook(#[from] AddressBookError),

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering the JSON snapshot failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
