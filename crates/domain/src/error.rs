//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomeSphereError`] via `#[from]`. Dispatch failures are the exception:
//! they are reported inside an action outcome and never propagated.

use crate::command::ParamKind;
use crate::device::DeviceVariant;
use crate::id::DeviceId;

/// Top-level error for household, session and validation operations.
#[derive(Debug, thiserror::Error)]
pub enum HomeSphereError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("authentication error")]
    Authentication(#[from] AuthError),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("login name must not be empty")]
    EmptyLoginName,

    #[error("room area must be a finite, non-negative number")]
    InvalidArea,

    #[error("{entity} with id {id} already exists")]
    DuplicateId { entity: &'static str, id: String },

    #[error("no {entity} ids left to assign")]
    IdsExhausted { entity: &'static str },
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Session failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no user matches the given login name and password")]
    InvalidCredentials,
}

/// Why a single action could not be applied to its device.
///
/// The `Display` output is the human-readable reason recorded in a scene
/// report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("command `{command}` is not registered")]
    UnregisteredCommand { command: String },

    #[error("parameter `{parameter}` of `{command}` is not a valid {expected}")]
    InvalidParameter {
        command: String,
        parameter: String,
        expected: ParamKind,
    },

    #[error("device {device_id} ({variant}) does not support `{command}`")]
    CapabilityMismatch {
        command: String,
        device_id: DeviceId,
        variant: DeviceVariant,
    },
}
