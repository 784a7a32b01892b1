use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;
use voyage_core::{KeyValueStorage, StorageError};

/// In-process storage area, optionally capped like a browser's local storage quota.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
    /// Upper bound on the summed byte length of all stored values.
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn used_bytes(&self) -> usize {
        self.entries
            .read()
            .map(|entries| entries.values().map(String::len).sum())
            .unwrap_or(0)
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Unavailable("memory storage lock poisoned".to_string())
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(poisoned)?;

        if let Some(limit) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        debug!("memory storage: wrote {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("voyage:tours").unwrap(), None);

        storage.write("voyage:tours", "[]").unwrap();
        assert_eq!(storage.read("voyage:tours").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.len(), 1);

        storage.remove("voyage:tours").unwrap();
        storage.remove("voyage:tours").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_quota_rejects_write_and_keeps_previous_value() {
        let storage = MemoryStorage::with_quota(10);
        storage.write("a", "12345").unwrap();
        // Overwriting a key only counts the new value.
        storage.write("a", "1234567890").unwrap();

        let err = storage.write("b", "x").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { needed: 11, limit: 10, .. }));
        assert_eq!(storage.read("b").unwrap(), None);

        let err = storage.write("a", "12345678901").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert_eq!(storage.read("a").unwrap().as_deref(), Some("1234567890"));
        assert_eq!(storage.used_bytes(), 10);
    }
}
