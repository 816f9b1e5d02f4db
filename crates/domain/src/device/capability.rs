//! Optional capability interfaces implemented by device variants.

use super::kind::{AirConditioner, LightBulb, SmartLock};

/// Target-temperature control.
pub trait Thermostat {
    fn target_temp(&self) -> f64;
    fn set_target_temp(&mut self, celsius: f64);
}

/// Brightness and color-temperature control.
pub trait Dimmable {
    fn brightness(&self) -> u32;
    fn set_brightness(&mut self, brightness: u32);
    fn color_temp(&self) -> u32;
    fn set_color_temp(&mut self, kelvin: u32);
}

/// Lock control.
pub trait Lockable {
    fn is_locked(&self) -> bool;
    fn lock(&mut self);
    fn unlock(&mut self);
}

impl Thermostat for AirConditioner {
    fn target_temp(&self) -> f64 {
        self.target_temp
    }

    fn set_target_temp(&mut self, celsius: f64) {
        self.target_temp = celsius;
    }
}

impl Dimmable for LightBulb {
    fn brightness(&self) -> u32 {
        self.brightness
    }

    fn set_brightness(&mut self, brightness: u32) {
        self.brightness = brightness;
    }

    fn color_temp(&self) -> u32 {
        self.color_temp
    }

    fn set_color_temp(&mut self, kelvin: u32) {
        self.color_temp = kelvin;
    }
}

impl Lockable for SmartLock {
    fn is_locked(&self) -> bool {
        self.locked
    }

    fn lock(&mut self) {
        self.locked = true;
    }

    fn unlock(&mut self) {
        self.locked = false;
    }
}
