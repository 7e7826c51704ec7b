use super::*;
use crate::net::types::Provider;
use crate::util::storage::MemoryStorage;

fn record(id: &str) -> SessionRecord {
    SessionRecord {
        id: id.to_owned(),
        name: "Test User".to_owned(),
        email: "test@neurucare.com".to_owned(),
        phone: Some("010-1234-5678".to_owned()),
        provider: None,
    }
}

// =============================================================
// Reads
// =============================================================

#[test]
fn new_store_is_logged_out() {
    let store = SessionStore::new(MemoryStorage::new());
    assert!(!store.is_logged_in());
    assert!(store.current_user().is_none());
}

#[test]
fn default_browser_store_is_logged_out() {
    let store = SessionStore::<BrowserStorage>::default();
    assert!(!store.is_logged_in());
}

// =============================================================
// set / clear
// =============================================================

#[test]
fn set_persistent_writes_only_local_scope() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store.set(record("1"), StorageScope::Persistent).unwrap();

    assert!(store.is_logged_in());
    assert_eq!(store.current_user().map(|u| u.id.as_str()), Some("1"));
    assert!(storage.contains(StorageScope::Persistent, SESSION_STORAGE_KEY));
    assert!(!storage.contains(StorageScope::Tab, SESSION_STORAGE_KEY));
}

#[test]
fn set_replaces_record_in_other_scope() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store.set(record("1"), StorageScope::Persistent).unwrap();
    store.set(record("2"), StorageScope::Tab).unwrap();

    assert!(!storage.contains(StorageScope::Persistent, SESSION_STORAGE_KEY));
    let reloaded = SessionStore::hydrate(storage);
    assert_eq!(reloaded.current_user().map(|u| u.id.as_str()), Some("2"));
}

#[test]
fn clear_empties_memory_and_both_scopes() {
    let storage = MemoryStorage::new();
    storage.set(StorageScope::Tab, SESSION_STORAGE_KEY, "{}");
    let mut store = SessionStore::new(storage.clone());
    store.set(record("1"), StorageScope::Persistent).unwrap();

    store.clear();

    assert!(!store.is_logged_in());
    assert!(storage.is_empty());
}

// =============================================================
// hydrate
// =============================================================

#[test]
fn hydrate_prefers_persistent_scope() {
    let storage = MemoryStorage::new();
    save_json(&storage, StorageScope::Persistent, SESSION_STORAGE_KEY, &record("local")).unwrap();
    save_json(&storage, StorageScope::Tab, SESSION_STORAGE_KEY, &record("tab")).unwrap();

    let store = SessionStore::hydrate(storage);
    assert_eq!(store.current_user().map(|u| u.id.as_str()), Some("local"));
}

#[test]
fn hydrate_falls_back_to_tab_scope() {
    let storage = MemoryStorage::new();
    let mut social = record("kakao_123456");
    social.provider = Some(Provider::Kakao);
    save_json(&storage, StorageScope::Tab, SESSION_STORAGE_KEY, &social).unwrap();

    let store = SessionStore::hydrate(storage);
    assert_eq!(store.current_user(), Some(&social));
}

#[test]
fn hydrate_skips_unparseable_record() {
    let storage = MemoryStorage::new();
    storage.set(StorageScope::Persistent, SESSION_STORAGE_KEY, "not json");
    save_json(&storage, StorageScope::Tab, SESSION_STORAGE_KEY, &record("tab")).unwrap();

    let store = SessionStore::hydrate(storage);
    assert_eq!(store.current_user().map(|u| u.id.as_str()), Some("tab"));
    assert!(!store.storage().contains(StorageScope::Persistent, SESSION_STORAGE_KEY));
    assert!(store.storage().contains(StorageScope::Tab, SESSION_STORAGE_KEY));
}

#[test]
fn hydrate_drops_unparseable_record_when_nothing_else_is_stored() {
    let storage = MemoryStorage::new();
    storage.set(StorageScope::Tab, SESSION_STORAGE_KEY, "{\"id\":");

    let store = SessionStore::hydrate(storage);
    assert!(!store.is_logged_in());
    assert!(store.storage().is_empty());
}

#[test]
fn hydrate_with_empty_storage_is_logged_out() {
    let store = SessionStore::hydrate(MemoryStorage::new());
    assert!(!store.is_logged_in());
}
