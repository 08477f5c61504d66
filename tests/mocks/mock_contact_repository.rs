use contact_book::domain::ContactId;
use contact_book::error::StoreResult;
use contact_book::models::{Contact, ContactDraft};
use contact_book::repositories::{ContactRepository, ContactStore};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock contact repository for testing.
///
/// Delegates storage to a real `ContactStore` and tracks method calls for
/// verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    inner: ContactStore,
    call_counts: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add contacts directly, bypassing call tracking.
    pub fn add_contacts(&mut self, contacts: &[(&str, &str, Option<&str>)]) -> Vec<ContactId> {
        contacts
            .iter()
            .map(|(name, phone, email)| {
                let mut draft = ContactDraft::new(*name, *phone);
                if let Some(email) = email {
                    draft = draft.with_email(*email);
                }
                self.inner.create(draft).expect("fixture contact is valid")
            })
            .collect()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn create(&mut self, draft: ContactDraft) -> StoreResult<ContactId> {
        self.track_call("create");
        self.inner.create(draft)
    }

    fn get(&self, id: ContactId) -> StoreResult<&Contact> {
        self.track_call("get");
        self.inner.get(id)
    }

    fn delete(&mut self, id: ContactId) -> StoreResult<Contact> {
        self.track_call("delete");
        self.inner.delete(id)
    }

    fn list_all(&self) -> Vec<(ContactId, &Contact)> {
        self.track_call("list_all");
        self.inner.list_all()
    }

    fn len(&self) -> usize {
        self.track_call("len");
        self.inner.len()
    }
}
