//! Device — a controllable thing in the household.
//!
//! Every device carries the base contract (identity, name, manufacturer,
//! online/power flags, running log) plus a [`DeviceKind`] holding the
//! variant-specific state. Optional capabilities are reached through
//! query methods returning trait handles, never through type inspection.

mod capability;
mod handle;
mod kind;

pub use capability::{Dimmable, Lockable, Thermostat};
pub use handle::DeviceHandle;
pub use kind::{AirConditioner, BathroomScale, DeviceKind, DeviceVariant, LightBulb, SmartLock};

use std::sync::Arc;

use crate::energy::EnergyMeter;
use crate::error::{HomeSphereError, ValidationError};
use crate::id::DeviceId;
use crate::manufacturer::Manufacturer;
use crate::running_log::RunningLog;

/// A device of any variant.
///
/// Equality is identity: two devices are equal when their ids are equal,
/// whatever their attributes.
#[derive(Debug, Clone)]
pub struct Device {
    id: DeviceId,
    name: String,
    manufacturer: Arc<Manufacturer>,
    online: bool,
    powered: bool,
    running_logs: Vec<RunningLog>,
    kind: DeviceKind,
}

impl Device {
    /// Create a device that starts offline and powered off.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] when `name` is empty.
    pub fn new(
        id: DeviceId,
        name: impl Into<String>,
        manufacturer: Arc<Manufacturer>,
        kind: DeviceKind,
    ) -> Result<Self, HomeSphereError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(Self {
            id,
            name,
            manufacturer,
            online: false,
            powered: false,
            running_logs: Vec::new(),
            kind,
        })
    }

    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the display name.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] when `name` is empty; the
    /// current name is kept.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), HomeSphereError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.name = name;
        Ok(())
    }

    #[must_use]
    pub fn manufacturer(&self) -> &Arc<Manufacturer> {
        &self.manufacturer
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Online is reachability and is managed independently of power, except
    /// that [`power_off`](Self::power_off) always clears it.
    pub fn set_online(&mut self, online: bool) {
        self.online = online;
    }

    #[must_use]
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Switch power on. Does not bring the device online.
    pub fn power_on(&mut self) {
        self.powered = true;
    }

    /// Switch power off. A powered-off device is always offline.
    pub fn power_off(&mut self) {
        self.powered = false;
        self.online = false;
    }

    #[must_use]
    pub fn running_logs(&self) -> &[RunningLog] {
        &self.running_logs
    }

    pub fn add_running_log(&mut self, log: RunningLog) {
        self.running_logs.push(log);
    }

    #[must_use]
    pub fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut DeviceKind {
        &mut self.kind
    }

    #[must_use]
    pub fn variant(&self) -> DeviceVariant {
        self.kind.variant()
    }

    /// Target-temperature control, if this variant has it.
    pub fn as_thermostat_mut(&mut self) -> Option<&mut dyn Thermostat> {
        match &mut self.kind {
            DeviceKind::AirConditioner(ac) => Some(ac as &mut dyn Thermostat),
            _ => None,
        }
    }

    /// Brightness and color-temperature control, if this variant has it.
    pub fn as_dimmable_mut(&mut self) -> Option<&mut dyn Dimmable> {
        match &mut self.kind {
            DeviceKind::LightBulb(bulb) => Some(bulb as &mut dyn Dimmable),
            _ => None,
        }
    }

    /// Lock control, if this variant has it.
    pub fn as_lockable_mut(&mut self) -> Option<&mut dyn Lockable> {
        match &mut self.kind {
            DeviceKind::SmartLock(lock) => Some(lock as &mut dyn Lockable),
            _ => None,
        }
    }

    /// The energy reporting capability, present only for variants with a
    /// rated power draw.
    #[must_use]
    pub fn energy_reporting(&self) -> Option<EnergyMeter<'_>> {
        self.kind
            .rated_power_watts()
            .map(|rated| EnergyMeter::new(self, rated))
    }
}

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Device {}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} #{} '{}' (online: {}, powered: {})",
            self.variant(),
            self.id,
            self.name,
            self.online,
            self.powered
        )
    }
}
