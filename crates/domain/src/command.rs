//! Command registry — the dispatch contract between scenes and devices.
//!
//! Scenes speak an abstract vocabulary (`"powerOff"`, `"setTemperature"`).
//! The registry maps each name to a concrete [`Operation`], which fixes the
//! parameter shape. Resolving a name plus a raw string parameter yields a
//! typed [`Command`], which is then applied through the target device's
//! capability interfaces. New commands need an explicit registry entry;
//! unknown names resolve to an error, never a panic.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceVariant};
use crate::error::DispatchError;

/// Shape of the parameter an operation expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// The parameter string is ignored.
    None,
    /// A finite `f64`.
    Float,
    /// A `u32`.
    Integer,
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("empty parameter"),
            Self::Float => f.write_str("number"),
            Self::Integer => f.write_str("non-negative integer"),
        }
    }
}

/// A concrete device operation a command name can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    PowerOn,
    PowerOff,
    SetTargetTemp,
    SetBrightness,
    SetColorTemp,
    Lock,
    Unlock,
}

impl Operation {
    #[must_use]
    pub const fn parameter(self) -> ParamKind {
        match self {
            Self::PowerOn | Self::PowerOff | Self::Lock | Self::Unlock => ParamKind::None,
            Self::SetTargetTemp => ParamKind::Float,
            Self::SetBrightness | Self::SetColorTemp => ParamKind::Integer,
        }
    }

    /// Parse `raw` into the typed command for this operation.
    ///
    /// Returns `None` when `raw` does not fit [`parameter`](Self::parameter).
    #[must_use]
    pub fn bind(self, raw: &str) -> Option<Command> {
        let raw = raw.trim();
        let command = match self {
            Self::PowerOn => Command::PowerOn,
            Self::PowerOff => Command::PowerOff,
            Self::Lock => Command::Lock,
            Self::Unlock => Command::Unlock,
            Self::SetTargetTemp => {
                let celsius = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
                Command::SetTargetTemp(celsius)
            }
            Self::SetBrightness => Command::SetBrightness(raw.parse().ok()?),
            Self::SetColorTemp => Command::SetColorTemp(raw.parse().ok()?),
        };
        Some(command)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PowerOn => f.write_str("Device::power_on"),
            Self::PowerOff => f.write_str("Device::power_off"),
            Self::SetTargetTemp => f.write_str("Thermostat::set_target_temp"),
            Self::SetBrightness => f.write_str("Dimmable::set_brightness"),
            Self::SetColorTemp => f.write_str("Dimmable::set_color_temp"),
            Self::Lock => f.write_str("Lockable::lock"),
            Self::Unlock => f.write_str("Lockable::unlock"),
        }
    }
}

/// A resolved command carrying its typed parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    PowerOn,
    PowerOff,
    SetTargetTemp(f64),
    SetBrightness(u32),
    SetColorTemp(u32),
    Lock,
    Unlock,
}

impl Command {
    /// Apply to `device` through its capability interfaces.
    ///
    /// # Errors
    ///
    /// Returns the device's variant, leaving the device untouched, when that
    /// variant lacks the capability this command needs.
    pub fn apply(self, device: &mut Device) -> Result<(), DeviceVariant> {
        let variant = device.variant();
        match self {
            Self::PowerOn => device.power_on(),
            Self::PowerOff => device.power_off(),
            Self::SetTargetTemp(celsius) => device
                .as_thermostat_mut()
                .ok_or(variant)?
                .set_target_temp(celsius),
            Self::SetBrightness(level) => {
                device.as_dimmable_mut().ok_or(variant)?.set_brightness(level);
            }
            Self::SetColorTemp(kelvin) => {
                device.as_dimmable_mut().ok_or(variant)?.set_color_temp(kelvin);
            }
            Self::Lock => device.as_lockable_mut().ok_or(variant)?.lock(),
            Self::Unlock => device.as_lockable_mut().ok_or(variant)?.unlock(),
        }
        Ok(())
    }
}

/// One registry entry: abstract name → concrete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    pub operation: Operation,
}

impl CommandSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, operation: Operation) -> Self {
        Self {
            name: name.into(),
            operation,
        }
    }

    #[must_use]
    pub fn parameter(&self) -> ParamKind {
        self.operation.parameter()
    }
}

static STANDARD: LazyLock<CommandRegistry> = LazyLock::new(|| {
    CommandRegistry::new([
        CommandSpec::new("powerOn", Operation::PowerOn),
        CommandSpec::new("powerOff", Operation::PowerOff),
        CommandSpec::new("setTemperature", Operation::SetTargetTemp),
        CommandSpec::new("setBrightness", Operation::SetBrightness),
        CommandSpec::new("setColorTemp", Operation::SetColorTemp),
        CommandSpec::new("lock", Operation::Lock),
        CommandSpec::new("unlock", Operation::Unlock),
    ])
});

/// Read-only table of registered commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    entries: BTreeMap<String, CommandSpec>,
}

impl CommandRegistry {
    /// Build a registry. A later spec with the same name replaces an
    /// earlier one.
    #[must_use]
    pub fn new(specs: impl IntoIterator<Item = CommandSpec>) -> Self {
        let entries = specs
            .into_iter()
            .map(|spec| (spec.name.clone(), spec))
            .collect();
        Self { entries }
    }

    /// The process-wide registry used by default.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    #[must_use]
    pub fn lookup(&self, command: &str) -> Option<&CommandSpec> {
        self.entries.get(command)
    }

    /// Registered entries, ordered by name.
    pub fn specs(&self) -> impl Iterator<Item = &CommandSpec> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an abstract command and its raw parameter.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::UnregisteredCommand`] when `command` has no entry
    /// - [`DispatchError::InvalidParameter`] when `parameter` does not parse
    ///   as the entry's [`ParamKind`]
    pub fn resolve(&self, command: &str, parameter: &str) -> Result<Command, DispatchError> {
        let spec = self
            .lookup(command)
            .ok_or_else(|| DispatchError::UnregisteredCommand {
                command: command.to_string(),
            })?;
        spec.operation
            .bind(parameter)
            .ok_or_else(|| DispatchError::InvalidParameter {
                command: command.to_string(),
                parameter: parameter.to_string(),
                expected: spec.parameter(),
            })
    }
}
