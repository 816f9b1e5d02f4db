//! Energy reporting capability.
//!
//! Only variants with a rated power draw report energy. The model is
//! intentionally coarse: a powered device draws exactly its rated power,
//! and energy over an interval assumes the device ran at rated power for
//! the whole wall-clock interval. Brightness and temperature settings do
//! not scale the draw.

use crate::device::Device;
use crate::time::{Timestamp, hours_between};

/// Power draw and energy accounting for a device.
pub trait EnergyReporting {
    /// Fixed draw while powered on, in watts.
    fn rated_power_watts(&self) -> f64;

    fn is_powered(&self) -> bool;

    /// Instantaneous draw in watts: the rated power when on, else `0`.
    fn current_power(&self) -> f64 {
        if self.is_powered() {
            self.rated_power_watts()
        } else {
            0.0
        }
    }

    /// Energy in kWh over `[start, end]` at rated power.
    ///
    /// The result is negative when `start` is after `end`; callers that
    /// need a hard error must check the ordering themselves.
    fn energy_over_interval(&self, start: Timestamp, end: Timestamp) -> f64 {
        self.rated_power_watts() / 1000.0 * hours_between(start, end)
    }
}

/// The [`EnergyReporting`] view of a rated device, obtained from
/// [`Device::energy_reporting`].
#[derive(Debug, Clone, Copy)]
pub struct EnergyMeter<'a> {
    device: &'a Device,
    rated_power_watts: f64,
}

impl<'a> EnergyMeter<'a> {
    pub(crate) fn new(device: &'a Device, rated_power_watts: f64) -> Self {
        Self {
            device,
            rated_power_watts,
        }
    }

    #[must_use]
    pub fn device(&self) -> &'a Device {
        self.device
    }
}

impl EnergyReporting for EnergyMeter<'_> {
    fn rated_power_watts(&self) -> f64 {
        self.rated_power_watts
    }

    fn is_powered(&self) -> bool {
        self.device.is_powered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::Duration;

    use crate::device::{AirConditioner, DeviceKind, LightBulb};
    use crate::id::{DeviceId, ManufacturerId};
    use crate::manufacturer::Manufacturer;
    use crate::time::now;

    fn device(kind: DeviceKind) -> Device {
        let maker = Arc::new(Manufacturer::new(ManufacturerId::new(1), "AC Corp", "WiFi").unwrap());
        Device::new(DeviceId::new(1), "Test", maker, kind).unwrap()
    }

    fn climate() -> Device {
        device(DeviceKind::AirConditioner(AirConditioner::default()))
    }

    #[test]
    fn should_draw_nothing_when_powered_off() {
        let ac = climate();
        assert_eq!(ac.energy_reporting().unwrap().current_power(), 0.0);
    }

    #[test]
    fn should_draw_rated_power_when_powered_on() {
        let mut ac = climate();
        ac.power_on();
        assert_eq!(ac.energy_reporting().unwrap().current_power(), 700.0);

        let mut bulb = device(DeviceKind::LightBulb(LightBulb {
            brightness: 10,
            color_temp: 2700,
        }));
        bulb.power_on();
        assert_eq!(bulb.energy_reporting().unwrap().current_power(), 50.0);
    }

    #[test]
    fn should_ignore_settings_when_reporting_power() {
        let mut bulb = device(DeviceKind::LightBulb(LightBulb {
            brightness: 1,
            color_temp: 6500,
        }));
        bulb.power_on();
        assert_eq!(
            bulb.energy_reporting().unwrap().current_power(),
            LightBulb::RATED_POWER_WATTS
        );
    }

    #[test]
    fn should_compute_rated_energy_over_a_day() {
        let mut ac = climate();
        ac.power_on();
        let start = now();
        let end = start + Duration::hours(24);
        let kwh = ac.energy_reporting().unwrap().energy_over_interval(start, end);
        assert!((kwh - 16.8).abs() < 1e-9);
    }

    #[test]
    fn should_return_zero_for_empty_interval() {
        let ac = climate();
        let t = now();
        assert_eq!(ac.energy_reporting().unwrap().energy_over_interval(t, t), 0.0);
    }

    #[test]
    fn should_be_antisymmetric_under_swapped_bounds() {
        let ac = climate();
        let meter = ac.energy_reporting().unwrap();
        let start = now();
        for minutes in [1, 59, 90, 1440, 10_007] {
            let end = start + Duration::minutes(minutes);
            assert_eq!(
                meter.energy_over_interval(start, end),
                -meter.energy_over_interval(end, start)
            );
        }
    }

    #[test]
    fn should_be_negative_when_start_after_end() {
        let ac = climate();
        let end = now();
        let start = end + Duration::hours(1);
        assert!(ac.energy_reporting().unwrap().energy_over_interval(start, end) < 0.0);
    }

    #[test]
    fn should_not_depend_on_power_state_for_interval_energy() {
        let ac = climate();
        let start = now();
        let end = start + Duration::hours(2);
        let kwh = ac.energy_reporting().unwrap().energy_over_interval(start, end);
        assert!((kwh - 1.4).abs() < 1e-9);
    }
}
