//! Contact Book - an interactive command-line contact book.
//!
//! Contacts (name, phone, optional email) live in memory for the session and
//! are written to or read from `contacts.csv` in the working directory on
//! request.
//!
//! # Architecture
//!
//! - **domain**: Value objects (ids, email addresses, raw input) and validation errors
//! - **models**: The validated `Contact` and its unvalidated `ContactDraft`
//! - **repositories**: Contact storage trait and the in-memory store
//! - **search**: Case-insensitive substring queries
//! - **transfer**: CSV import and export
//! - **cli**: Menu, prompts and action handlers
//! - **config**: Configuration from the environment
//! - **error**: Error types per concern

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;
pub mod transfer;

pub use cli::{Action, App, Console};
pub use config::Config;
pub use domain::{ContactId, EmailAddress, Field, RawValue, ValidationError};
pub use error::{ConfigError, PromptError, SearchError, StoreError, TransferError};
pub use models::{Contact, ContactDraft};
pub use repositories::{ContactRepository, ContactStore};
pub use search::ContactQuery;
pub use transfer::ImportReport;
