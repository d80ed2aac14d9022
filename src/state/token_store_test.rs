use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.load().unwrap(), StoredTokens::default());
    assert!(store.is_empty());
}

#[test]
fn save_writes_both_tokens() {
    let store = MemoryTokenStore::new();
    store.save("a1", Some("r1")).unwrap();
    assert_eq!(
        store.load().unwrap(),
        StoredTokens { access_token: Some("a1".to_owned()), refresh_token: Some("r1".to_owned()) }
    );
}

#[test]
fn save_without_refresh_keeps_existing_refresh() {
    let store = MemoryTokenStore::with_tokens("a1", Some("r1"));
    store.save("a2", None).unwrap();
    let tokens = store.load().unwrap();
    assert_eq!(tokens.access_token.as_deref(), Some("a2"));
    assert_eq!(tokens.refresh_token.as_deref(), Some("r1"));
}

#[test]
fn clear_removes_both_tokens() {
    let store = MemoryTokenStore::with_tokens("a1", Some("r1"));
    store.clear().unwrap();
    assert!(store.is_empty());
}

#[test]
fn remove_keys_attempts_every_key() {
    let mut seen = Vec::new();
    let result = remove_keys(|key| {
        seen.push(key);
        if key == ACCESS_TOKEN_KEY { Err(()) } else { Ok(()) }
    });
    assert_eq!(seen, [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY]);
    assert!(matches!(result, Err(StoreError::WriteRejected { key: ACCESS_TOKEN_KEY })));
}

#[test]
fn remove_keys_reports_first_failure() {
    let result = remove_keys(|_| Err::<(), _>("quota"));
    assert!(matches!(result, Err(StoreError::WriteRejected { key: ACCESS_TOKEN_KEY })));

    let result = remove_keys(|key| if key == REFRESH_TOKEN_KEY { Err("denied") } else { Ok(()) });
    assert!(matches!(result, Err(StoreError::WriteRejected { key: REFRESH_TOKEN_KEY })));
    assert!(remove_keys(|_| Ok::<(), ()>(())).is_ok());
}

#[test]
fn blank_entries_load_as_absent() {
    let store = MemoryTokenStore::with_tokens("  ", Some(""));
    assert_eq!(store.load().unwrap(), StoredTokens::default());
}

#[test]
fn clones_share_slots() {
    let store = MemoryTokenStore::new();
    let other = store.clone();
    store.save("a1", None).unwrap();
    assert_eq!(other.snapshot().access_token.as_deref(), Some("a1"));
}
