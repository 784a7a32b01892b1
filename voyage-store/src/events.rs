use tokio::sync::broadcast;
use tracing::{debug, warn};
use voyage_shared::StorageChangedEvent;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;
/// Upper bound for a configured capacity; the channel allocates every slot up front.
pub const MAX_CHANNEL_CAPACITY: usize = 65_536;

/// Fan-out channel for storage change notifications, shared by every
/// context of one storage area.
#[derive(Clone, Debug)]
pub struct ChangeBus {
    sender: broadcast::Sender<StorageChangedEvent>,
}

impl ChangeBus {
    /// `capacity` is clamped to `1..=MAX_CHANNEL_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        let clamped = capacity.clamp(1, MAX_CHANNEL_CAPACITY);
        if clamped != capacity {
            warn!("Change channel capacity {} out of range, using {}", capacity, clamped);
        }
        let (sender, _) = broadcast::channel(clamped);
        Self { sender }
    }

    /// Never fails: with no subscribers the event is simply dropped.
    pub fn publish(&self, event: StorageChangedEvent) {
        let key = event.key.clone();
        match self.sender.send(event) {
            Ok(receivers) => debug!("Published change of {} to {} subscriber(s)", key, receivers),
            Err(_) => debug!("Change of {} published with no subscribers", key),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StorageChangedEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_every_subscriber_receives_the_event() {
        let bus = ChangeBus::new(8);
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(StorageChangedEvent::written("voyage:tours", Uuid::new_v4(), "[]"));

        assert_eq!(first.try_recv().unwrap().key, "voyage:tours");
        assert_eq!(second.try_recv().unwrap().key, "voyage:tours");
    }

    #[test]
    fn test_publish_without_subscribers_is_harmless() {
        let bus = ChangeBus::default();
        bus.publish(StorageChangedEvent::removed("voyage:tours", Uuid::new_v4()));
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_out_of_range_capacity_is_clamped() {
        for capacity in [0, MAX_CHANNEL_CAPACITY + 1, usize::MAX / 2 + 1, usize::MAX] {
            let bus = ChangeBus::new(capacity);
            let mut sub = bus.subscribe();
            bus.publish(StorageChangedEvent::written("voyage:tours", Uuid::new_v4(), "[]"));
            assert_eq!(sub.try_recv().unwrap().key, "voyage:tours");
        }
    }
}
