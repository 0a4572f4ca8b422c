//! Tests for the header containers.

#[cfg(test)]
mod tests {
    use crate::headers::{CapacityError, FieldList, HeaderError, HeaderStore};

    #[test]
    fn test_put_appends_in_order() {
        let mut store = HeaderStore::new();
        store.put("Host", "example.com").unwrap();
        store.put("Accept", "*/*").unwrap();
        store.put("Host", "other.example.com").unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap(), ("Host", "example.com"));
        assert_eq!(store.get(1).unwrap(), ("Accept", "*/*"));
        assert_eq!(store.get(2).unwrap(), ("Host", "other.example.com"));
    }

    #[test]
    fn test_find_is_case_insensitive_and_returns_first_match() {
        let mut store = HeaderStore::new();
        store.put("Content-Length", "5").unwrap();
        store.put("X-Tag", "a").unwrap();
        store.put("x-tag", "b").unwrap();

        assert_eq!(store.find("content-length", 0), Some(0));
        assert_eq!(store.find("X-TAG", 0), Some(1));
        assert_eq!(store.value("x-tag"), Some("a"));
        assert!(store.contains("CONTENT-LENGTH"));
    }

    #[test]
    fn test_find_from_start_index() {
        let mut store = HeaderStore::new();
        store.put("Via", "one").unwrap();
        store.put("Accept", "*/*").unwrap();
        store.put("VIA", "two").unwrap();

        let first = store.find("via", 0).unwrap();
        let second = store.find("via", first + 1).unwrap();
        assert_eq!(store.get(second).unwrap().1, "two");
        assert_eq!(store.find("via", second + 1), None);
        assert_eq!(store.find("via", 10), None);
    }

    #[test]
    fn test_find_missing_name() {
        let store = HeaderStore::new();
        assert_eq!(store.find("Host", 0), None);
        assert_eq!(store.value("Host"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let mut store = HeaderStore::new();
        store.put("Host", "example.com").unwrap();
        assert_eq!(store.get(1), Err(HeaderError::OutOfRange { index: 1, count: 1 }));
    }

    #[test]
    fn test_growth_keeps_every_entry() {
        let mut list = FieldList::new();
        for i in 0..100 {
            assert_eq!(list.push(i).unwrap(), i);
        }

        assert_eq!(list.len(), 100);
        assert!(list.capacity() >= 100);
        assert!(list.iter().copied().eq(0..100));
    }

    #[test]
    fn test_growth_doubles_capacity() {
        let mut list = FieldList::new();
        for i in 0..5 {
            list.push(i).unwrap();
        }
        assert!(list.capacity() >= 8);
    }

    #[test]
    fn test_limit_rejects_extra_fields() {
        let mut store = HeaderStore::with_limit(2);
        store.put("A", "1").unwrap();
        store.put("B", "2").unwrap();

        let result = store.put("C", "3");
        assert!(matches!(result, Err(CapacityError::LimitReached(2))));
        assert_eq!(store.len(), 2);
        assert_eq!(store.find("C", 0), None);
    }

    #[test]
    fn test_display_lists_fields() {
        let mut store = HeaderStore::new();
        store.put("Server", "fileserv").unwrap();
        store.put("Content-Length", "0").unwrap();
        assert_eq!(store.to_string(), "Server: fileserv\nContent-Length: 0\n");
    }
}
