//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! contact IDs and email addresses. These value objects provide validation
//! at construction time and prevent invalid data from being represented in
//! the system.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod raw_value;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::{Field, ValidationError};
pub use raw_value::RawValue;
