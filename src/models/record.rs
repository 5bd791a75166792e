//! Record model representing a named contact and its phone numbers.

use crate::domain::{Name, Phone};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named contact holding an ordered list of unique phone numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

/// Unvalidated wire form of a record.
#[derive(Debug, Deserialize)]
struct RecordData {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
}

impl TryFrom<RecordData> for Record {
    type Error = AddressBookError;

    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        let mut record = Record::new(data.name)?;
        for phone in data.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty after trimming.
    pub fn new(name: impl AsRef<str>) -> AddressBookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Append a phone to the end of the list.
    ///
    /// The duplicate check runs before format validation, so re-adding an
    /// existing value reports `DuplicatePhone` whatever its format.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> AddressBookResult<()> {
        let phone = phone.into();
        if self.find_phone(&phone).is_some() {
            return Err(AddressBookError::DuplicatePhone(phone));
        }

        let phone = Phone::new(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone, keeping the relative order of the others.
    pub fn remove_phone(&mut self, phone: &str) -> AddressBookResult<()> {
        let index = self
            .position(phone)
            .ok_or_else(|| AddressBookError::PhoneNotFound(phone.to_string()))?;

        self.phones.remove(index);
        tracing::debug!(name = %self.name, phone, "Phone removed");
        Ok(())
    }

    /// Replace `old` with `new` at the same position.
    ///
    /// `new` is validated but not checked against the other phones on the
    /// record, so editing onto an existing value leaves two equal entries.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> AddressBookResult<()> {
        let index = self
            .position(old)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old.to_string()))?;

        let phone = Phone::new(new)?;
        tracing::debug!(name = %self.name, old, new = %phone, "Phone edited");
        self.phones[index] = phone;
        Ok(())
    }

    /// Find a phone by exact value.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
