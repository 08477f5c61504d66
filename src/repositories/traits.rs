use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactDraft};

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage so the query engine, CSV
/// transfer and action handlers work against any implementation (in-memory
/// store, test doubles).
pub trait ContactRepository {
    /// Validate a draft and store it under a fresh id.
    ///
    /// On validation failure nothing is stored and no id is consumed.
    fn create(&mut self, draft: ContactDraft) -> StoreResult<ContactId>;

    /// Retrieve a single contact by ID.
    fn get(&self, id: ContactId) -> StoreResult<&Contact>;

    /// Remove a contact, returning it.
    fn delete(&mut self, id: ContactId) -> StoreResult<Contact>;

    /// All contacts in insertion order.
    fn list_all(&self) -> Vec<(ContactId, &Contact)>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
