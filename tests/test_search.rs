//! Tests for case-insensitive contact search.

use contact_book::domain::ContactId;
use contact_book::error::SearchError;
use contact_book::models::ContactDraft;
use contact_book::repositories::{ContactRepository, ContactStore};
use contact_book::search::{search, ContactQuery};

fn sample_store() -> ContactStore {
    let mut store = ContactStore::new();
    store
        .create(ContactDraft::new("Ada Lovelace", "555-1234").with_email("ada@example.com"))
        .unwrap();
    store
        .create(ContactDraft::new("Charles Babbage", "555-9876"))
        .unwrap();
    store
        .create(ContactDraft::new("Grace Hopper", "+1 202 555 0100").with_email("GRACE@Navy.mil"))
        .unwrap();
    store
}

fn ids(values: &[u64]) -> Vec<ContactId> {
    values.iter().copied().map(ContactId::new).collect()
}

fn run(store: &ContactStore, text: &str) -> Vec<ContactId> {
    search(store, &ContactQuery::new(text).unwrap())
}

#[test]
fn test_search_by_name_case_insensitive() {
    let store = sample_store();
    assert_eq!(run(&store, "ada"), ids(&[0]));
    assert_eq!(run(&store, "HOPPER"), ids(&[2]));
}

#[test]
fn test_search_by_phone() {
    let store = sample_store();
    assert_eq!(run(&store, "555-"), ids(&[0, 1]));
    assert_eq!(run(&store, "555"), ids(&[0, 1, 2]));
}

#[test]
fn test_search_by_email() {
    let store = sample_store();
    assert_eq!(run(&store, "navy"), ids(&[2]));
    assert_eq!(run(&store, "@"), ids(&[0, 2]));
}

#[test]
fn test_search_no_match() {
    let store = sample_store();
    assert!(run(&store, "turing").is_empty());
}

#[test]
fn test_search_skips_deleted() {
    let mut store = sample_store();
    store.delete(ContactId::new(0)).unwrap();
    assert!(run(&store, "ada").is_empty());
}

#[test]
fn test_search_whitespace_query() {
    let store = sample_store();
    // Names with a space and the spaced phone number all match
    assert_eq!(run(&store, " "), ids(&[0, 1, 2]));
}

#[test]
fn test_empty_query_cannot_be_built() {
    assert_eq!(ContactQuery::new(""), Err(SearchError::EmptyQuery));
}

#[test]
fn test_search_matches_exactly_the_substring_holders() {
    let store = sample_store();
    for text in ["a", "ar", "ce", "12", ".com", "x"] {
        let query = ContactQuery::new(text).unwrap();
        let expected: Vec<ContactId> = store
            .list_all()
            .into_iter()
            .filter(|(_, c)| {
                let needle = text.to_lowercase();
                c.name().to_lowercase().contains(&needle)
                    || c.phone().to_lowercase().contains(&needle)
                    || c
                        .email()
                        .is_some_and(|e| e.as_str().to_lowercase().contains(&needle))
            })
            .map(|(id, _)| id)
            .collect();

        assert_eq!(search(&store, &query), expected, "query {:?}", text);
    }
}
