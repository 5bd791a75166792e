//! Demonstration scenario for the address book.
//!
//! Builds a small book, edits and queries it, and renders each step either
//! as plain text or as JSON snapshots.

use crate::config::OutputFormat;
use crate::error::{AddressBookError, AddressBookResult, DemoError};
use crate::models::{AddressBook, Record};
use serde::Serialize;
use std::io::Write;

/// One rendered step of the scenario.
#[derive(Debug, Clone, Serialize)]
pub struct DemoStep {
    /// Short description of the step
    pub step: &'static str,

    /// Text rendering produced by the step
    pub text: String,

    /// State of the book after the step
    pub book: AddressBook,
}

/// Run the scenario and collect every step.
pub fn run_scenario() -> AddressBookResult<Vec<DemoStep>> {
    let mut steps = Vec::new();
    let mut book = AddressBook::new();

    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane")?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    steps.push(DemoStep {
        step: "list all records",
        text: book.to_string(),
        book: book.clone(),
    });

    let john = book
        .find_mut("John")
        .ok_or_else(|| AddressBookError::RecordNotFound("John".to_string()))?;
    john.edit_phone("1234567890", "1112223333")?;
    let edited = john.to_string();
    steps.push(DemoStep {
        step: "edit phone for John",
        text: edited,
        book: book.clone(),
    });

    let john = book
        .find("John")
        .ok_or_else(|| AddressBookError::RecordNotFound("John".to_string()))?;
    let found = john
        .find_phone("5555555555")
        .ok_or_else(|| AddressBookError::PhoneNotFound("5555555555".to_string()))?;
    steps.push(DemoStep {
        step: "find phone for John",
        text: format!("{}: {}", john.name(), found),
        book: book.clone(),
    });

    book.delete("Jane")?;
    steps.push(DemoStep {
        step: "delete Jane",
        text: book.to_string(),
        book,
    });

    Ok(steps)
}

/// Run the scenario and write its report to `out`.
pub fn write_report<W: Write>(out: &mut W, format: OutputFormat) -> Result<(), DemoError> {
    let steps = run_scenario()?;
    tracing::info!(steps = steps.len(), format = %format, "Writing demo report");

    match format {
        OutputFormat::Text => {
            for step in &steps {
                writeln!(out, "{}", step.text)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &steps)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_steps() {
        let steps = run_scenario().unwrap();
        let texts: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();

        assert_eq!(
            texts,
            vec![
                "Contact name: John, phones: 1234567890; 5555555555\nContact name: Jane, phones: 9876543210",
                "Contact name: John, phones: 1112223333; 5555555555",
                "John: 5555555555",
                "Contact name: John, phones: 1112223333; 5555555555",
            ]
        );
    }

    #[test]
    fn test_scenario_final_book() {
        let steps = run_scenario().unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.book.len(), 1);
        assert!(last.book.find("Jane").is_none());
    }

    #[test]
    fn test_write_report_text() {
        let mut out = Vec::new();
        write_report(&mut out, OutputFormat::Text).unwrap();

        let report = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Contact name: John, phones: 1234567890; 5555555555");
        assert_eq!(lines[1], "Contact name: Jane, phones: 9876543210");
        assert_eq!(lines[3], "John: 5555555555");
    }

    #[test]
    fn test_write_report_json() {
        let mut out = Vec::new();
        write_report(&mut out, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let steps = value.as_array().unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[3]["step"], "delete Jane");
        assert_eq!(steps[3]["book"][0]["name"], "John");
        assert_eq!(steps[3]["book"][0]["phones"][0], "1112223333");
    }
}
