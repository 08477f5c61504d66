use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactDraft};
use crate::repositories::traits::ContactRepository;
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory contact repository.
///
/// Contacts live for the duration of the session. Ids come from a counter
/// owned by the store that only moves forward, so the id-ordered map also
/// iterates in insertion order and deleted ids are never handed out again.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: BTreeMap<ContactId, Contact>,
    next_id: ContactId,
}

impl ContactStore {
    /// Create an empty store whose first id is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next successful `create` will return.
    pub fn next_id(&self) -> ContactId {
        self.next_id
    }
}

impl ContactRepository for ContactStore {
    fn create(&mut self, draft: ContactDraft) -> StoreResult<ContactId> {
        let contact = Contact::from_draft(draft)?;

        let id = self.next_id;
        self.contacts.insert(id, contact);
        self.next_id = id.next();

        debug!(%id, "Contact created");
        Ok(id)
    }

    fn get(&self, id: ContactId) -> StoreResult<&Contact> {
        self.contacts.get(&id).ok_or(StoreError::NotFound(id))
    }

    fn delete(&mut self, id: ContactId) -> StoreResult<Contact> {
        let contact = self.contacts.remove(&id).ok_or(StoreError::NotFound(id))?;
        debug!(%id, "Contact deleted");
        Ok(contact)
    }

    fn list_all(&self) -> Vec<(ContactId, &Contact)> {
        self.contacts.iter().map(|(id, contact)| (*id, contact)).collect()
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Field, ValidationError};

    #[test]
    fn test_create_allocates_sequential_ids() {
        let mut store = ContactStore::new();
        let first = store.create(ContactDraft::new("Ada", "1")).unwrap();
        let second = store.create(ContactDraft::new("Bob", "2")).unwrap();

        assert_eq!(first, ContactId::new(0));
        assert_eq!(second, ContactId::new(1));
        assert_eq!(store.next_id(), ContactId::new(2));
    }

    #[test]
    fn test_failed_create_does_not_consume_id() {
        let mut store = ContactStore::new();
        let err = store.create(ContactDraft::new("", "1")).unwrap_err();

        assert_eq!(
            err,
            StoreError::Validation(ValidationError::EmptyField(Field::Name))
        );
        assert!(store.is_empty());
        assert_eq!(store.next_id(), ContactId::new(0));
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let mut store = ContactStore::new();
        let id = store.create(ContactDraft::new("Ada", "1")).unwrap();
        store.delete(id).unwrap();

        let next = store.create(ContactDraft::new("Bob", "2")).unwrap();
        assert_eq!(next, ContactId::new(1));
    }
}
