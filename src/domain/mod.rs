//! Domain value objects and types.
//!
//! `Name` and `Phone` are independent validated wrappers around a string.
//! Validation happens at construction time, so an invalid value can never
//! be held by a record.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
