//! Event — an immutable record of something that happened during scene
//! execution.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, SceneId};
use crate::time::{Timestamp, now};

/// Kind of [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A scene started executing.
    SceneTriggered,
    /// One action was applied to its device.
    ActionExecuted,
    /// One action could not be applied; `data.reason` says why.
    ActionFailed,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SceneTriggered => f.write_str("scene_triggered"),
            Self::ActionExecuted => f.write_str("action_executed"),
            Self::ActionFailed => f.write_str("action_failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: EventType,
    pub scene_id: Option<SceneId>,
    pub device_id: Option<DeviceId>,
    #[serde(default)]
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(
        event_type: EventType,
        scene_id: Option<SceneId>,
        device_id: Option<DeviceId>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            event_type,
            scene_id,
            device_id,
            data,
            timestamp: now(),
        }
    }
}
