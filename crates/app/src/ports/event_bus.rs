//! Event bus port — publish/subscribe for scene execution events.

use homesphere_domain::error::HomeSphereError;
use homesphere_domain::event::Event;

/// Publishes domain events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    ///
    /// # Errors
    ///
    /// Implementation specific; callers in this crate treat publishing as
    /// fire-and-forget.
    fn publish(&self, event: Event) -> Result<(), HomeSphereError>;
}

impl<T: EventPublisher + ?Sized> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> Result<(), HomeSphereError> {
        (**self).publish(event)
    }
}

impl<T: EventPublisher + ?Sized> EventPublisher for &T {
    fn publish(&self, event: Event) -> Result<(), HomeSphereError> {
        (**self).publish(event)
    }
}
