use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemorySessionStorage::new();
    assert!(storage.is_empty());

    storage.set("authToken", "abc");
    assert_eq!(storage.get("authToken").as_deref(), Some("abc"));
    assert_eq!(storage.len(), 1);

    storage.set("authToken", "def");
    assert_eq!(storage.get("authToken").as_deref(), Some("def"));
    assert_eq!(storage.len(), 1);

    storage.remove("authToken");
    assert!(storage.get("authToken").is_none());
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemorySessionStorage::new();
    storage.remove("userInfo");
    assert!(storage.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let storage = BrowserSessionStorage;
    storage.set("authToken", "abc");
    assert!(storage.get("authToken").is_none());
    storage.remove("authToken");
}
