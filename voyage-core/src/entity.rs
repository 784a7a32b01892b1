use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::{CoreResult, Violations};

/// A record type stored as one whole collection under one namespaced key.
pub trait Entity: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Everything needed to create a record except its id.
    type Draft: Debug;

    /// Partial update: every `Some` field overwrites, every `None` is kept.
    type Patch: Debug + Default;

    /// Collection name used to build the storage key, e.g. `flights`.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Shallow merge of `patch` onto `self`.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Built-in records written on first use and on reset.
    fn seed() -> Vec<Self>;

    /// Field rules this record breaks. Checked before a record is persisted.
    fn violations(&self) -> Violations {
        Violations::new()
    }

    fn validate(&self) -> CoreResult<()> {
        self.violations().into_result()
    }
}

/// Copies every `Some` field of a patch onto the matching field of a record.
///
/// `merge_fields!(record, patch; title, price)` expands to one
/// `if let Some(v) = patch.title { record.title = v; }` per field.
#[macro_export]
macro_rules! merge_fields {
    ($target:expr, $patch:ident; $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )*
    };
}

/// Like [`merge_fields!`] for record fields that are themselves `Option`s.
#[macro_export]
macro_rules! merge_optional_fields {
    ($target:expr, $patch:ident; $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = Some(value);
            }
        )*
    };
}
