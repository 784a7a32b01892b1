pub mod entity;
pub mod repository;
pub mod identity;
pub mod views;
pub mod validation;

pub use entity::Entity;
pub use repository::{KeyValueStorage, StorageError};
pub use validation::Violations;
pub use views::Activatable;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

