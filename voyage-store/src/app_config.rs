use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use voyage_core::{KeyValueStorage, StorageError};

use crate::events::{ChangeBus, DEFAULT_CHANNEL_CAPACITY};
use crate::file_repo::FileStorage;
use crate::memory::MemoryStorage;
use crate::StorageArea;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub events: EventsConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Prefix of every collection key, e.g. `voyage` gives `voyage:flights`.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Only enforced by the memory backend.
    pub quota_bytes: Option<usize>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_namespace() -> String {
    "voyage".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            namespace: default_namespace(),
            quota_bytes: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EventsConfig {
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_channel_capacity() -> usize {
    DEFAULT_CHANNEL_CAPACITY
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Shipped defaults; every field also has a serde default
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Machine-local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `VOYAGE__STORAGE__DATA_DIR=/var/lib/voyage`
            .add_source(config::Environment::with_prefix("VOYAGE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn open_backend(&self) -> Result<Arc<dyn KeyValueStorage>, StorageError> {
        let backend: Arc<dyn KeyValueStorage> = match self.storage.backend {
            StorageBackend::File => Arc::new(FileStorage::open(&self.storage.data_dir)?),
            StorageBackend::Memory => match self.storage.quota_bytes {
                Some(quota) => Arc::new(MemoryStorage::with_quota(quota)),
                None => Arc::new(MemoryStorage::new()),
            },
        };
        Ok(backend)
    }

    /// First context of a fresh storage area built from this configuration.
    pub fn open_area(&self) -> Result<StorageArea, StorageError> {
        let backend = self.open_backend()?;
        Ok(StorageArea::new(backend, ChangeBus::new(self.events.channel_capacity)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.namespace, "voyage");
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        assert_eq!(config.events.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn test_partial_source_fills_defaults() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                "[storage]\nbackend = \"memory\"\nquota_bytes = 5000000\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.quota_bytes, Some(5_000_000));
        assert_eq!(config.storage.namespace, "voyage");

        let area = config.open_area().unwrap();
        area.write("voyage:tours", "[]").unwrap();
        assert_eq!(area.read("voyage:tours").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_oversized_channel_capacity_does_not_panic() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                "[storage]\nbackend = \"memory\"\n[events]\nchannel_capacity = 4611686018427387904\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.events.channel_capacity, 1 << 62);

        let tab_a = config.open_area().unwrap();
        let mut sub_b = tab_a.open_context().subscribe();
        tab_a.write("voyage:tours", "[]").unwrap();
        assert!(sub_b.try_next().is_some());
    }

    #[test]
    fn test_file_backend_uses_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.data_dir = dir.path().join("store");

        let area = config.open_area().unwrap();
        area.write("voyage:flights", "[]").unwrap();
        assert!(dir.path().join("store").join("voyage%3Aflights.json").exists());
    }
}
