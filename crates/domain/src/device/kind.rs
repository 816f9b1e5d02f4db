//! Device variants and their variant-specific state.

use serde::{Deserialize, Serialize};

/// Climate-control unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AirConditioner {
    /// Measured room temperature, in °C.
    pub current_temp: f64,
    /// Requested temperature, in °C.
    pub target_temp: f64,
}

impl AirConditioner {
    pub const RATED_POWER_WATTS: f64 = 700.0;
}

/// Luminaire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightBulb {
    pub brightness: u32,
    /// Color temperature, in kelvin.
    pub color_temp: u32,
}

impl LightBulb {
    pub const RATED_POWER_WATTS: f64 = 50.0;
}

/// Access lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartLock {
    pub locked: bool,
    /// Battery charge, in percent.
    pub battery_level: u8,
}

/// Body-weight scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BathroomScale {
    /// Last measured mass, in kg.
    pub body_mass: f64,
    /// Battery charge, in percent.
    pub battery_level: u8,
}

/// The closed set of device variants with their state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum DeviceKind {
    AirConditioner(AirConditioner),
    LightBulb(LightBulb),
    SmartLock(SmartLock),
    BathroomScale(BathroomScale),
}

impl DeviceKind {
    #[must_use]
    pub fn variant(&self) -> DeviceVariant {
        match self {
            Self::AirConditioner(_) => DeviceVariant::AirConditioner,
            Self::LightBulb(_) => DeviceVariant::LightBulb,
            Self::SmartLock(_) => DeviceVariant::SmartLock,
            Self::BathroomScale(_) => DeviceVariant::BathroomScale,
        }
    }

    /// Fixed power draw while switched on, for variants that report energy.
    #[must_use]
    pub fn rated_power_watts(&self) -> Option<f64> {
        match self {
            Self::AirConditioner(_) => Some(AirConditioner::RATED_POWER_WATTS),
            Self::LightBulb(_) => Some(LightBulb::RATED_POWER_WATTS),
            Self::SmartLock(_) | Self::BathroomScale(_) => None,
        }
    }
}

/// Fieldless tag naming a [`DeviceKind`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceVariant {
    AirConditioner,
    LightBulb,
    SmartLock,
    BathroomScale,
}

impl std::fmt::Display for DeviceVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AirConditioner => f.write_str("air conditioner"),
            Self::LightBulb => f.write_str("light bulb"),
            Self::SmartLock => f.write_str("smart lock"),
            Self::BathroomScale => f.write_str("bathroom scale"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_kind_to_variant_tag() {
        let kind = DeviceKind::BathroomScale(BathroomScale {
            body_mass: 70.5,
            battery_level: 85,
        });
        assert_eq!(kind.variant(), DeviceVariant::BathroomScale);
    }

    #[test]
    fn should_rate_only_climate_and_light() {
        assert_eq!(
            DeviceKind::AirConditioner(AirConditioner::default()).rated_power_watts(),
            Some(700.0)
        );
        assert_eq!(
            DeviceKind::LightBulb(LightBulb::default()).rated_power_watts(),
            Some(50.0)
        );
        assert_eq!(
            DeviceKind::SmartLock(SmartLock::default()).rated_power_watts(),
            None
        );
    }

    #[test]
    fn should_serialize_kind_with_variant_tag() {
        let kind = DeviceKind::SmartLock(SmartLock {
            locked: true,
            battery_level: 75,
        });
        let json = serde_json::to_value(&kind).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"variant": "smart_lock", "locked": true, "battery_level": 75})
        );
    }
}
