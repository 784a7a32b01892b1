use std::marker::PhantomData;
use tracing::{debug, info, warn};
use voyage_core::identity::{namespaced_key, new_record_id};
use voyage_core::Entity;

use crate::area::{ChangeSubscription, StorageArea};
use crate::StoreResult;

/// One entity family persisted as a single JSON array under one namespaced key.
///
/// Every mutation reads the current array, changes it in memory and writes the
/// whole array back. Nothing is locked between the read and the write, so two
/// contexts mutating the same collection race and the last write wins in full.
pub struct Collection<T: Entity> {
    area: StorageArea,
    key: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            area: self.area.clone(),
            key: self.key.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("key", &self.key)
            .field("area", &self.area)
            .finish()
    }
}

impl<T: Entity> Collection<T> {
    pub fn new(area: StorageArea, namespace: &str) -> Self {
        Self {
            key: namespaced_key(namespace, T::COLLECTION),
            area,
            _entity: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn area(&self) -> &StorageArea {
        &self.area
    }

    pub fn subscribe(&self) -> ChangeSubscription {
        self.area.subscribe()
    }

    /// Current records. Seeds the key when it is absent, unreadable or holds
    /// anything that is not an array of `T`; never fails.
    pub fn get_all(&self) -> Vec<T> {
        let raw = match self.area.read(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Reading {} failed, falling back to seed: {}", self.key, e);
                None
            }
        };

        if let Some(raw) = raw {
            match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(items) => return items,
                Err(e) => warn!("Discarding unreadable {} ({}), restoring seed", self.key, e),
            }
        }

        let seed = T::seed();
        match self.save_all(&seed) {
            Ok(()) => info!("Seeded {} with {} record(s)", self.key, seed.len()),
            Err(e) => warn!("Could not persist seed for {}: {}", self.key, e),
        }
        seed
    }

    /// Replaces the stored collection. The only write path.
    pub fn save_all(&self, items: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.area.write(&self.key, &raw)?;
        debug!("Saved {} record(s) to {}", items.len(), self.key);
        Ok(())
    }

    /// Discards every customisation and restores the seed.
    pub fn reset(&self) -> StoreResult<Vec<T>> {
        let seed = T::seed();
        self.save_all(&seed)?;
        info!("Reset {} to {} seed record(s)", self.key, seed.len());
        Ok(seed)
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.get_all().into_iter().find(|item| item.id() == id)
    }

    /// Creates a record with a fresh id and appends it.
    pub fn add(&self, draft: T::Draft) -> StoreResult<T> {
        let mut items = self.get_all();
        let record = T::from_draft(new_record_id(), draft);
        record.validate()?;

        items.push(record.clone());
        self.save_all(&items)?;
        debug!("Added {} to {}", record.id(), self.key);
        Ok(record)
    }

    /// Merges `patch` onto the first record with `id`.
    ///
    /// Returns `Ok(None)` without writing anything when no record matches.
    /// Fails only if the merge breaks a field rule the stored record met.
    pub fn update(&self, id: &str, patch: T::Patch) -> StoreResult<Option<T>> {
        let mut items = self.get_all();
        let Some(position) = items.iter().position(|item| item.id() == id) else {
            debug!("Update of {} in {} skipped: not found", id, self.key);
            return Ok(None);
        };

        let mut merged = items[position].clone();
        merged.apply_patch(patch);
        // Rules the stored record already broke do not block unrelated changes.
        merged
            .violations()
            .introduced_since(&items[position].violations())
            .into_result()?;

        items[position] = merged.clone();
        self.save_all(&items)?;
        debug!("Updated {} in {}", id, self.key);
        Ok(Some(merged))
    }

    /// Deletes every record with `id`. Writes only if something was removed.
    pub fn remove(&self, id: &str) -> StoreResult<bool> {
        let mut items = self.get_all();
        let before = items.len();
        items.retain(|item| item.id() != id);

        if items.len() == before {
            debug!("Remove of {} from {} skipped: not found", id, self.key);
            return Ok(false);
        }

        self.save_all(&items)?;
        debug!("Removed {} from {}", id, self.key);
        Ok(true)
    }
}
