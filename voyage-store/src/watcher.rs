use tracing::debug;
use voyage_core::Entity;

use crate::area::{ChangeSubscription, Signal};
use crate::collection::Collection;

/// A context's in-memory copy of one collection, kept fresh by change
/// notifications from other contexts.
///
/// Notifications carry no deltas: on any change of the watched key the copy is
/// replaced wholesale by a fresh `get_all()`. Writes made through this
/// context's own collection are not announced back; call [`reload`] after them.
///
/// [`reload`]: CollectionWatcher::reload
pub struct CollectionWatcher<T: Entity> {
    collection: Collection<T>,
    subscription: ChangeSubscription,
    items: Vec<T>,
}

impl<T: Entity> CollectionWatcher<T> {
    pub fn new(collection: Collection<T>) -> Self {
        // Subscribe before the first read so no write in between is missed.
        let subscription = collection.subscribe();
        let items = collection.get_all();
        Self {
            collection,
            subscription,
            items,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    pub fn reload(&mut self) {
        self.items = self.collection.get_all();
    }

    /// Applies pending notifications. Returns `true` if the copy was reloaded.
    pub fn refresh(&mut self) -> bool {
        let key = self.collection.key();
        let stale = self
            .subscription
            .drain()
            .iter()
            .any(|signal| signal.affects(key));

        if stale {
            debug!("Refreshing {} after change in another context", key);
            self.reload();
        }
        stale
    }

    /// Waits until another context changes the watched key, then reloads.
    /// Returns `false` once no further notifications can arrive.
    pub async fn changed(&mut self) -> bool {
        loop {
            match self.subscription.next().await {
                Some(signal) if signal.affects(self.collection.key()) => {
                    if let Signal::Changed(event) = &signal {
                        debug!("{} changed by context {}", event.key, event.origin);
                    }
                    self.reload();
                    return true;
                }
                Some(_) => continue,
                None => return false,
            }
        }
    }
}
