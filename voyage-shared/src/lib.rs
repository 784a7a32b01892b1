pub mod models;
pub mod pii;

pub use models::events::StorageChangedEvent;
pub use pii::Masked;
