use std::fmt;
use std::sync::Arc;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::broadcast;
use tracing::{debug, warn};
use uuid::Uuid;
use voyage_core::{KeyValueStorage, StorageError};
use voyage_shared::StorageChangedEvent;

use crate::events::ChangeBus;
use crate::memory::MemoryStorage;

/// One browsing context's view of a shared storage area.
///
/// Every context opened from the same area shares the backend and the change
/// bus. Successful writes are announced to all *other* contexts; the writer
/// already holds the new value and is not notified.
#[derive(Clone)]
pub struct StorageArea {
    backend: Arc<dyn KeyValueStorage>,
    bus: ChangeBus,
    context_id: Uuid,
}

impl StorageArea {
    pub fn new(backend: Arc<dyn KeyValueStorage>, bus: ChangeBus) -> Self {
        Self {
            backend,
            bus,
            context_id: Uuid::new_v4(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), ChangeBus::default())
    }

    /// A sibling context (another tab) over the same backend and bus.
    pub fn open_context(&self) -> Self {
        let context = Self {
            backend: Arc::clone(&self.backend),
            bus: self.bus.clone(),
            context_id: Uuid::new_v4(),
        };
        debug!("Opened storage context {}", context.context_id);
        context
    }

    pub fn context_id(&self) -> Uuid {
        self.context_id
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStorage> {
        &self.backend
    }

    pub fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend.read(key)
    }

    /// Writes `value` and, only if the write succeeded, notifies other contexts.
    pub fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend.write(key, value)?;
        self.bus
            .publish(StorageChangedEvent::written(key, self.context_id, value));
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)?;
        self.bus.publish(StorageChangedEvent::removed(key, self.context_id));
        Ok(())
    }

    /// Change notifications from other contexts, starting from now.
    pub fn subscribe(&self) -> ChangeSubscription {
        ChangeSubscription {
            receiver: self.bus.subscribe(),
            context_id: self.context_id,
        }
    }
}

impl fmt::Debug for StorageArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageArea")
            .field("context_id", &self.context_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Changed(StorageChangedEvent),
    /// Notifications were dropped because the subscriber fell behind;
    /// everything it caches must be reloaded.
    Resync,
}

impl Signal {
    /// Whether a holder of `key` has to reload after this signal.
    pub fn affects(&self, key: &str) -> bool {
        match self {
            Signal::Changed(event) => event.key == key,
            Signal::Resync => true,
        }
    }
}

pub struct ChangeSubscription {
    receiver: broadcast::Receiver<StorageChangedEvent>,
    context_id: Uuid,
}

impl ChangeSubscription {
    /// Next pending signal without waiting. Own-context events are skipped.
    pub fn try_next(&mut self) -> Option<Signal> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if event.origin == self.context_id => continue,
                Ok(event) => return Some(Signal::Changed(event)),
                Err(TryRecvError::Lagged(missed)) => {
                    warn!("Context {} missed {} change notification(s)", self.context_id, missed);
                    return Some(Signal::Resync);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    pub fn drain(&mut self) -> Vec<Signal> {
        std::iter::from_fn(|| self.try_next()).collect()
    }

    /// Waits for the next signal from another context. `None` once the bus is gone.
    pub async fn next(&mut self) -> Option<Signal> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if event.origin == self.context_id => continue,
                Ok(event) => return Some(Signal::Changed(event)),
                Err(RecvError::Lagged(missed)) => {
                    warn!("Context {} missed {} change notification(s)", self.context_id, missed);
                    return Some(Signal::Resync);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
