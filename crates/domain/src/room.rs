//! Room — a named area of the household holding devices.

use crate::device::DeviceHandle;
use crate::error::{HomeSphereError, ValidationError};
use crate::id::{DeviceId, RoomId};

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Floor area in square meters.
    pub area: f64,
    devices: Vec<DeviceHandle>,
}

impl Room {
    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] when `name` is empty or
    /// `area` is negative or not finite.
    pub fn new(id: RoomId, name: impl Into<String>, area: f64) -> Result<Self, HomeSphereError> {
        let room = Self {
            id,
            name: name.into(),
            area,
            devices: Vec::new(),
        };
        room.validate()?;
        Ok(room)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - `area` is negative or not finite ([`ValidationError::InvalidArea`])
    pub fn validate(&self) -> Result<(), HomeSphereError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.area.is_finite() || self.area < 0.0 {
            return Err(ValidationError::InvalidArea.into());
        }
        Ok(())
    }

    /// Devices in insertion order.
    #[must_use]
    pub fn devices(&self) -> &[DeviceHandle] {
        &self.devices
    }

    pub fn add_device(&mut self, device: DeviceHandle) {
        self.devices.push(device);
    }

    /// Remove every device with `device_id`. Returns how many were removed.
    pub fn remove_device(&mut self, device_id: DeviceId) -> usize {
        let before = self.devices.len();
        self.devices.retain(|d| d.id() != device_id);
        before - self.devices.len()
    }

    #[must_use]
    pub fn device(&self, device_id: DeviceId) -> Option<&DeviceHandle> {
        self.devices.iter().find(|d| d.id() == device_id)
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
