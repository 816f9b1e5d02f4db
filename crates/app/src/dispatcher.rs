//! Action dispatcher — resolve, parse and invoke one action.
//!
//! Dispatch never fails outward: every problem becomes a [`DispatchError`]
//! inside the returned [`ActionOutcome`]. Resolution and parameter parsing
//! happen before the device lock is taken, so those failures cannot touch
//! device state.

use homesphere_domain::action::Action;
use homesphere_domain::command::CommandRegistry;
use homesphere_domain::error::DispatchError;
use homesphere_domain::id::DeviceId;

/// Result of dispatching one action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub command: String,
    pub parameter: String,
    pub device_id: DeviceId,
    pub result: Result<(), DispatchError>,
}

impl ActionOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Human-readable failure reason, `None` on success.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.result.as_ref().err().map(ToString::to_string)
    }
}

impl std::fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}) on device {}: ",
            self.command, self.parameter, self.device_id
        )?;
        match &self.result {
            Ok(()) => f.write_str("ok"),
            Err(err) => write!(f, "failed, {err}"),
        }
    }
}

/// Turns actions into device mutations through a [`CommandRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct ActionDispatcher<'r> {
    registry: &'r CommandRegistry,
}

impl Default for ActionDispatcher<'static> {
    fn default() -> Self {
        Self::new(CommandRegistry::standard())
    }
}

impl<'r> ActionDispatcher<'r> {
    #[must_use]
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &'r CommandRegistry {
        self.registry
    }

    /// Dispatch one action, synchronously and without retries.
    ///
    /// On success exactly the attribute targeted by the resolved operation
    /// has changed on the action's device.
    pub fn execute(&self, action: &Action) -> ActionOutcome {
        let device_id = action.device_id();
        tracing::debug!(
            command = %action.command,
            parameter = %action.parameter,
            %device_id,
            "dispatching action"
        );
        ActionOutcome {
            command: action.command.clone(),
            parameter: action.parameter.clone(),
            device_id,
            result: self.apply(action),
        }
    }

    fn apply(&self, action: &Action) -> Result<(), DispatchError> {
        let command = self.registry.resolve(&action.command, &action.parameter)?;
        action
            .device
            .write(|device| command.apply(device))
            .map_err(|variant| DispatchError::CapabilityMismatch {
                command: action.command.clone(),
                device_id: action.device_id(),
                variant,
            })
    }
}
