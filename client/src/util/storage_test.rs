use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc").unwrap();
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryStore::new();
    store.set(USER_KEY, "{}").unwrap();
    store.set(USER_KEY, r#"{"name":"A"}"#).unwrap();
    assert_eq!(store.get(USER_KEY).as_deref(), Some(r#"{"name":"A"}"#));
    assert_eq!(store.len(), 1);
}

#[test]
fn store_reference_delegates() {
    let store = MemoryStore::new();
    let by_ref = &store;
    by_ref.set(TOKEN_KEY, "t").unwrap();
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t"));
}

#[test]
fn local_storage_is_unavailable_off_browser() {
    assert_eq!(LocalStorage.set(TOKEN_KEY, "t"), Err(StorageError::Unavailable));
    assert_eq!(LocalStorage.get(TOKEN_KEY), None);
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(
        StorageError::WriteFailed("user".to_owned()).to_string(),
        "storage write failed for key user"
    );
}
