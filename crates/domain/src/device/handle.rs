//! Shared device handle.
//!
//! Rooms, scenes and actions all alias the same device state. A handle is a
//! cheap clone of an `Arc<Mutex<Device>>` that keeps a copy of the immutable
//! id, so identity checks never take the lock.

use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::Device;
use crate::id::DeviceId;

/// A shared, mutable reference to a [`Device`].
///
/// Equality and hashing use the device id only.
#[derive(Clone)]
pub struct DeviceHandle {
    id: DeviceId,
    inner: Arc<Mutex<Device>>,
}

impl DeviceHandle {
    #[must_use]
    pub fn new(device: Device) -> Self {
        Self {
            id: device.id(),
            inner: Arc::new(Mutex::new(device)),
        }
    }

    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Run `f` with shared access to the device.
    pub fn read<R>(&self, f: impl FnOnce(&Device) -> R) -> R {
        f(&*self.lock())
    }

    /// Run `f` with exclusive access to the device.
    pub fn write<R>(&self, f: impl FnOnce(&mut Device) -> R) -> R {
        f(&mut *self.lock())
    }

    /// Copy of the current device state.
    #[must_use]
    pub fn snapshot(&self) -> Device {
        self.read(Device::clone)
    }

    /// Whether both handles alias the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn lock(&self) -> MutexGuard<'_, Device> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Device> for DeviceHandle {
    fn from(device: Device) -> Self {
        Self::new(device)
    }
}

impl PartialEq for DeviceHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DeviceHandle {}

impl Hash for DeviceHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Debug for DeviceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceHandle").field("id", &self.id).finish()
    }
}
