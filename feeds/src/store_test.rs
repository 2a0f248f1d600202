use super::*;
use crate::records::TranscriptRecord;
use time::macros::{date, datetime};

fn record(id: RecordId) -> TranscriptRecord {
    TranscriptRecord {
        id,
        company_name: format!("Company {id}"),
        attendees: "Jo, Al".into(),
        date: date!(2024 - 01 - 05),
        transcript: "...".into(),
        insight: format!("insight {id}"),
        created_at: datetime!(2024-01-05 10:00 UTC),
        content_type: "transcript".into(),
    }
}

fn ids(store: &CollectionStore<TranscriptRecord>) -> Vec<RecordId> {
    store.items().iter().map(|r| r.id).collect()
}

// =============================================================
// replace_all
// =============================================================

#[test]
fn replace_all_keeps_server_order() {
    let mut store = CollectionStore::default();
    store.replace_all(vec![record(3), record(1), record(2)]);
    assert_eq!(ids(&store), vec![3, 1, 2]);
}

#[test]
fn replace_all_discards_previous_items() {
    let mut store = CollectionStore::default();
    store.apply_created(record(9));
    store.replace_all(vec![record(1)]);
    assert_eq!(ids(&store), vec![1]);
}

#[test]
fn replace_all_clears_load_error() {
    let mut store = CollectionStore::<TranscriptRecord>::default();
    store.mark_load_failed("Failed to fetch transcripts");
    assert_eq!(store.load_error(), Some("Failed to fetch transcripts"));
    store.replace_all(Vec::new());
    assert!(store.load_error().is_none());
    assert!(store.items().is_empty());
}

// =============================================================
// apply_created
// =============================================================

#[test]
fn creates_are_newest_first() {
    let mut store = CollectionStore::default();
    for id in 1..=4 {
        assert!(store.apply_created(record(id)));
    }
    assert_eq!(ids(&store), vec![4, 3, 2, 1]);
}

#[test]
fn apply_created_is_idempotent_on_id() {
    let mut once = CollectionStore::default();
    once.apply_created(record(1));

    let mut twice = CollectionStore::default();
    assert!(twice.apply_created(record(1)));
    assert!(!twice.apply_created(record(1)));

    assert_eq!(once.items(), twice.items());
}

#[test]
fn duplicate_create_does_not_replace_existing_record() {
    let mut store = CollectionStore::default();
    store.apply_created(record(1));
    let mut changed = record(1);
    changed.insight = "other".into();
    store.apply_created(changed);
    assert_eq!(store.items()[0].insight, "insight 1");
    assert_eq!(store.items().len(), 1);
}

// =============================================================
// apply_deleted
// =============================================================

#[test]
fn apply_deleted_removes_only_that_id() {
    let mut store = CollectionStore::default();
    store.replace_all(vec![record(1), record(2)]);
    assert!(store.apply_deleted(1));
    assert_eq!(ids(&store), vec![2]);
}

#[test]
fn apply_deleted_twice_is_a_no_op() {
    let mut store = CollectionStore::default();
    store.replace_all(vec![record(1), record(2)]);
    store.apply_deleted(1);
    let after_first = store.items().to_vec();
    assert!(!store.apply_deleted(1));
    assert_eq!(store.items(), after_first.as_slice());
}

#[test]
fn apply_deleted_on_empty_store_is_a_no_op() {
    let mut store = CollectionStore::<TranscriptRecord>::default();
    assert!(!store.apply_deleted(5));
    assert!(store.items().is_empty());
}

#[test]
fn mark_load_failed_keeps_items() {
    let mut store = CollectionStore::default();
    store.replace_all(vec![record(1)]);
    store.mark_load_failed("Failed to fetch transcripts");
    assert_eq!(store.items().len(), 1);
    assert!(store.contains(1));
}
