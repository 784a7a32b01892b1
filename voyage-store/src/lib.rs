pub mod app_config;
pub mod area;
pub mod collection;
pub mod events;
pub mod file_repo;
pub mod memory;
pub mod watcher;

pub use area::{ChangeSubscription, Signal, StorageArea};
pub use collection::Collection;
pub use events::ChangeBus;
pub use file_repo::FileStorage;
pub use memory::MemoryStorage;
pub use watcher::CollectionWatcher;

use voyage_core::{CoreError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CoreError),
}

pub type StoreResult<T> = Result<T, StoreError>;
