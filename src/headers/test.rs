use super::HeaderMap;

const fn is_send_sync<T: Send + Sync>() {}
const _: () = is_send_sync::<HeaderMap>();

#[test]
fn insert_and_get() {
    let mut map = HeaderMap::new();

    assert!(map.is_empty());
    assert!(map.insert("host", "example.com").is_none());
    assert!(map.insert("content-type", "text/plain").is_none());

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("host"), Some("example.com"));
    assert_eq!(map.get("content-type"), Some("text/plain"));
    assert_eq!(map.get("accept"), None);
    assert!(map.contains_key("host"));
    assert!(!map.contains_key("accept"));
}

#[test]
fn names_are_lowercased_on_insert() {
    let mut map = HeaderMap::new();
    map.insert("Content-Length", "12");

    assert_eq!(map.get("content-length"), Some("12"));
    assert!(map.iter().all(|(name, _)| name == "content-length"));
}

#[test]
fn lookup_is_case_insensitive() {
    let mut map = HeaderMap::new();
    map.insert("host", "example.com");

    assert_eq!(map.get("HOST"), Some("example.com"));
    assert_eq!(map.get("HoSt"), Some("example.com"));
}

#[test]
fn last_duplicate_wins() {
    let mut map = HeaderMap::new();

    assert!(map.insert("HOST", "first").is_none());
    assert_eq!(map.insert("host", "second").as_deref(), Some("first"));

    assert_eq!(map.len(), 1);
    assert_eq!(map.get("host"), Some("second"));
}

#[test]
fn iterates_in_insertion_order() {
    let mut map = HeaderMap::new();
    map.insert("b", "2");
    map.insert("a", "1");
    map.insert("c", "3");

    let order: Vec<_> = map.iter().map(|(name, _)| name).collect();
    assert_eq!(order, ["b", "a", "c"]);
}
