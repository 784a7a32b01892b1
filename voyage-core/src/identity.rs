use uuid::Uuid;

/// Fresh record id.
///
/// UUIDv7: ordered by creation time like a timestamp token, but with enough
/// random bits that two records created in the same millisecond never collide.
pub fn new_record_id() -> String {
    Uuid::now_v7().to_string()
}

/// Storage key of one collection, e.g. `voyage:holiday-packages`.
pub fn namespaced_key(namespace: &str, collection: &str) -> String {
    if namespace.is_empty() {
        collection.to_string()
    } else {
        format!("{}:{}", namespace, collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rapid_ids_are_unique_and_ordered() {
        let ids: Vec<String> = (0..1000).map(|_| new_record_id()).collect();
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(sorted, ids);
    }

    #[test]
    fn test_namespaced_key() {
        assert_eq!(namespaced_key("voyage", "tours"), "voyage:tours");
        assert_eq!(namespaced_key("", "tours"), "tours");
    }
}
