//! Energy reporting across a set of devices.

use homesphere_domain::device::DeviceHandle;
use homesphere_domain::energy::EnergyReporting;
use homesphere_domain::id::DeviceId;
use homesphere_domain::time::Timestamp;

/// Power and energy figures for one energy-reporting device.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyReading {
    pub device_id: DeviceId,
    pub device_name: String,
    /// Instantaneous draw in watts.
    pub current_power_watts: f64,
    /// Energy over the requested interval, in kWh.
    pub energy_kwh: f64,
}

impl std::fmt::Display for EnergyReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} '{}': {:.1} W now, {:.3} kWh",
            self.device_id, self.device_name, self.current_power_watts, self.energy_kwh
        )
    }
}

/// One reading per device that exposes the energy capability, in input
/// order. Devices without it are skipped.
#[must_use]
pub fn energy_report(
    devices: &[DeviceHandle],
    start: Timestamp,
    end: Timestamp,
) -> Vec<EnergyReading> {
    devices
        .iter()
        .filter_map(|handle| {
            handle.read(|device| {
                device.energy_reporting().map(|meter| EnergyReading {
                    device_id: device.id(),
                    device_name: device.name().to_string(),
                    current_power_watts: meter.current_power(),
                    energy_kwh: meter.energy_over_interval(start, end),
                })
            })
        })
        .collect()
}
