//! Query engine for contacts.
//!
//! Case-insensitive substring matching across name, phone and email.

pub mod query;

pub use query::{search, ContactQuery};
