//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.

pub mod event_bus;

pub use event_bus::EventPublisher;
