use chrono::Utc;
use uuid::Uuid;

/// Raised after a key in a shared storage area was written or removed.
///
/// Carries the full new value rather than a delta: receivers are expected to
/// re-read the collection, not patch their copy.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct StorageChangedEvent {
    pub key: String,
    /// Context that performed the write.
    pub origin: Uuid,
    /// `None` when the key was removed.
    pub new_value: Option<String>,
    pub timestamp: i64,
}

impl StorageChangedEvent {
    pub fn written(key: &str, origin: Uuid, value: &str) -> Self {
        Self {
            key: key.to_string(),
            origin,
            new_value: Some(value.to_string()),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn removed(key: &str, origin: Uuid) -> Self {
        Self {
            key: key.to_string(),
            origin,
            new_value: None,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn is_removal(&self) -> bool {
        self.new_value.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_event_has_no_value() {
        let origin = Uuid::new_v4();
        let event = StorageChangedEvent::removed("voyage:tours", origin);
        assert!(event.is_removal());
        assert_eq!(event.origin, origin);

        let event = StorageChangedEvent::written("voyage:tours", origin, "[]");
        assert!(!event.is_removal());
        assert_eq!(event.new_value.as_deref(), Some("[]"));
    }
}
