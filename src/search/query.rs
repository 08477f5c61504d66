//! Case-insensitive substring search over stored contacts.

use crate::domain::{ContactId, Field};
use crate::error::{SearchError, SearchResult};
use crate::models::Contact;
use crate::repositories::ContactRepository;

/// A validated, lower-cased search query.
///
/// Construction rejects the empty string, so [`search`] can never run with
/// an empty query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQuery {
    needle: String,
}

impl ContactQuery {
    /// Build a query from user text.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::EmptyQuery` for an empty string. Whitespace is
    /// a legitimate query and is kept.
    pub fn new(text: &str) -> SearchResult<Self> {
        if text.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        Ok(Self {
            needle: text.to_lowercase(),
        })
    }

    /// The normalized query text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// First field of the contact containing the query, checked in the order
    /// name, phone, email.
    pub fn matched_field(&self, contact: &Contact) -> Option<Field> {
        if contains_lowercase(contact.name(), &self.needle) {
            Some(Field::Name)
        } else if contains_lowercase(contact.phone(), &self.needle) {
            Some(Field::Phone)
        } else if contact
            .email()
            .is_some_and(|email| contains_lowercase(email.as_str(), &self.needle))
        {
            Some(Field::Email)
        } else {
            None
        }
    }

    /// Whether any field of the contact contains the query.
    pub fn matches(&self, contact: &Contact) -> bool {
        self.matched_field(contact).is_some()
    }
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Ids of every contact matching the query, in insertion order.
pub fn search<R>(repository: &R, query: &ContactQuery) -> Vec<ContactId>
where
    R: ContactRepository + ?Sized,
{
    repository
        .list_all()
        .into_iter()
        .filter(|(_, contact)| query.matches(contact))
        .map(|(id, _)| id)
        .collect()
}
