//! Action — one abstract instruction aimed at one device.

use crate::device::DeviceHandle;
use crate::id::DeviceId;

/// An abstract command, its string-encoded parameter and the target device.
///
/// The action shares the device; it does not own it. Two actions are equal
/// when command, parameter and device id are all equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub command: String,
    pub parameter: String,
    pub device: DeviceHandle,
}

impl Action {
    #[must_use]
    pub fn new(
        command: impl Into<String>,
        parameter: impl Into<String>,
        device: DeviceHandle,
    ) -> Self {
        Self {
            command: command.into(),
            parameter: parameter.into(),
            device,
        }
    }

    #[must_use]
    pub fn device_id(&self) -> DeviceId {
        self.device.id()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}) -> device {}",
            self.command,
            self.parameter,
            self.device.id()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::device::{AirConditioner, Device, DeviceKind};
    use crate::id::ManufacturerId;
    use crate::manufacturer::Manufacturer;

    fn ac(id: u32) -> DeviceHandle {
        let maker = Arc::new(Manufacturer::new(ManufacturerId::new(1), "AC Corp", "WiFi").unwrap());
        Device::new(
            DeviceId::new(id),
            "Living Room AC",
            maker,
            DeviceKind::AirConditioner(AirConditioner::default()),
        )
        .unwrap()
        .into()
    }

    #[test]
    fn should_keep_command_parameter_and_device() {
        let device = ac(1);
        let action = Action::new("setTemperature", "20.0", device.clone());
        assert_eq!(action.command, "setTemperature");
        assert_eq!(action.parameter, "20.0");
        assert_eq!(action.device, device);
        assert_eq!(action.device_id(), DeviceId::new(1));
    }

    #[test]
    fn should_compare_by_value() {
        let device = ac(1);
        let a = Action::new("setTemperature", "20.0", device.clone());
        let b = Action::new("setTemperature", "20.0", device.clone());
        let c = Action::new("setTemperature", "21.0", device);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Action::new("setTemperature", "20.0", ac(2)));
    }

    #[test]
    fn should_display_command_parameter_and_device() {
        let action = Action::new("setTemperature", "26.0", ac(1));
        assert_eq!(action.to_string(), "setTemperature(26.0) -> device 1");
    }
}
