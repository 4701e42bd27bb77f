use super::*;

fn record() -> SessionRecord {
    SessionRecord {
        id: 1,
        username: "alice".to_owned(),
        full_name: "Alice A.".to_owned(),
    }
}

// =============================================================
// load / save round trip
// =============================================================

#[test]
fn load_of_empty_store_is_none() {
    let mut store = MemorySessionStore::default();
    assert!(store.load().is_none());
}

#[test]
fn save_then_load_returns_same_record() {
    let mut store = MemorySessionStore::default();
    store.save(&record());
    assert_eq!(store.load(), Some(record()));
}

#[test]
fn save_replaces_prior_value() {
    let mut store = MemorySessionStore::with_raw("old");
    store.save(&record());
    assert_eq!(store.load(), Some(record()));
}

#[test]
fn load_of_valid_stored_json_is_idempotent() {
    let raw = r#"{"id":1,"username":"alice","fullName":"Alice A."}"#;
    let mut store = MemorySessionStore::with_raw(raw);
    let first = store.load().unwrap();
    store.save(&first);
    assert_eq!(store.load(), Some(first));
}

// =============================================================
// corrupt entries
// =============================================================

#[test]
fn load_of_malformed_value_is_none_and_deletes_entry() {
    let mut store = MemorySessionStore::with_raw("not json {");
    assert!(store.load().is_none());
    assert!(store.read_raw().is_none());
}

#[test]
fn load_of_partial_record_is_none_and_deletes_entry() {
    let mut store = MemorySessionStore::with_raw(r#"{"id":1,"username":"alice"}"#);
    assert!(store.load().is_none());
    assert!(store.read_raw().is_none());
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_stored_record() {
    let mut store = MemorySessionStore::default();
    store.save(&record());
    store.clear();
    assert!(store.read_raw().is_none());
    assert!(store.load().is_none());
}
