use super::*;

#[test]
fn scope_for_remember_picks_persistent_only_when_requested() {
    assert_eq!(StorageScope::for_remember(true), StorageScope::Persistent);
    assert_eq!(StorageScope::for_remember(false), StorageScope::Tab);
    assert_eq!(StorageScope::Persistent.other(), StorageScope::Tab);
}

#[test]
fn memory_storage_keeps_scopes_apart() {
    let store = MemoryStorage::new();
    store.set(StorageScope::Persistent, "k", "a");
    assert_eq!(store.get(StorageScope::Persistent, "k").as_deref(), Some("a"));
    assert_eq!(store.get(StorageScope::Tab, "k"), None);

    store.set(StorageScope::Tab, "k", "b");
    store.remove(StorageScope::Persistent, "k");
    assert!(!store.contains(StorageScope::Persistent, "k"));
    assert_eq!(store.get(StorageScope::Tab, "k").as_deref(), Some("b"));
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let view = store.clone();
    store.set(StorageScope::Tab, "k", "v");
    assert!(view.contains(StorageScope::Tab, "k"));
    view.remove(StorageScope::Tab, "k");
    assert!(store.is_empty());
}

#[test]
fn load_json_missing_key_is_none() {
    let store = MemoryStorage::new();
    let value: Option<Vec<u32>> = load_json(&store, StorageScope::Tab, "nothing").unwrap();
    assert!(value.is_none());
}

#[test]
fn save_then_load_json() {
    let store = MemoryStorage::new();
    save_json(&store, StorageScope::Persistent, "nums", &vec![1_u32, 2, 3]).unwrap();
    let value: Option<Vec<u32>> = load_json(&store, StorageScope::Persistent, "nums").unwrap();
    assert_eq!(value, Some(vec![1, 2, 3]));
}

#[test]
fn load_json_reports_garbage() {
    let store = MemoryStorage::new();
    store.set(StorageScope::Tab, "bad", "{not json");
    let result: Result<Option<Vec<u32>>, _> = load_json(&store, StorageScope::Tab, "bad");
    assert!(matches!(result, Err(StorageError::Decode(_))));
}

#[test]
fn browser_storage_is_empty_outside_the_browser() {
    #[cfg(not(feature = "hydrate"))]
    {
        let store = BrowserStorage;
        store.set(StorageScope::Persistent, "k", "v");
        assert_eq!(store.get(StorageScope::Persistent, "k"), None);
    }
}
