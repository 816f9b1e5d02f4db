//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use homesphere_domain::error::HomeSphereError;
use homesphere_domain::event::Event;

use crate::ports::EventPublisher;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped). Subscribers that fall more than
/// `capacity` events behind lose the oldest ones.
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}

impl Default for InProcessEventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: Event) -> Result<(), HomeSphereError> {
        // broadcast::send fails only when there are zero receivers.
        let _ = self.sender.send(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homesphere_domain::event::EventType;
    use homesphere_domain::id::{DeviceId, SceneId};
    use tokio::sync::broadcast::error::TryRecvError;

    fn scene_event() -> Event {
        Event::new(
            EventType::SceneTriggered,
            Some(SceneId::new(1)),
            None,
            serde_json::json!({"name": "Good night"}),
        )
    }

    #[test]
    fn should_deliver_event_to_subscriber() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(scene_event()).unwrap();

        let received = rx.try_recv().unwrap();
        assert_eq!(received.event_type, EventType::SceneTriggered);
        assert_eq!(received.scene_id, Some(SceneId::new(1)));
    }

    #[test]
    fn should_deliver_event_to_multiple_subscribers() {
        let bus = InProcessEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let event = Event::new(
            EventType::ActionExecuted,
            Some(SceneId::new(1)),
            Some(DeviceId::new(2)),
            serde_json::json!({}),
        );
        bus.publish(event).unwrap();

        assert_eq!(rx1.try_recv().unwrap().device_id, Some(DeviceId::new(2)));
        assert_eq!(rx2.try_recv().unwrap().device_id, Some(DeviceId::new(2)));
    }

    #[test]
    fn should_succeed_when_no_subscribers() {
        let bus = InProcessEventBus::new(16);
        assert!(bus.publish(scene_event()).is_ok());
    }

    #[test]
    fn should_not_deliver_events_published_before_subscribing() {
        let bus = InProcessEventBus::new(16);
        bus.publish(scene_event()).unwrap();
        let mut rx = bus.subscribe();
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn should_report_lag_when_subscriber_falls_behind() {
        let bus = InProcessEventBus::new(2);
        let mut rx = bus.subscribe();
        for _ in 0..3 {
            bus.publish(scene_event()).unwrap();
        }
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Lagged(1))));
    }
}
