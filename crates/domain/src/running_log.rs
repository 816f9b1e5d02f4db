//! Running log — append-only operation history kept by each device.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Severity of a running log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Stable numeric code: info 0, warning 1, error 2.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Info => 0,
            Self::Warning => 1,
            Self::Error => 2,
        }
    }

    /// Inverse of [`code`](Self::code).
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Info),
            1 => Some(Self::Warning),
            2 => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One entry in a device's running log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningLog {
    pub date_time: Timestamp,
    pub event: String,
    pub level: LogLevel,
    pub note: String,
}

impl RunningLog {
    #[must_use]
    pub fn new(
        date_time: Timestamp,
        event: impl Into<String>,
        level: LogLevel,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date_time,
            event: event.into(),
            level,
            note: note.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    #[test]
    fn should_keep_all_fields() {
        let ts = now();
        let log = RunningLog::new(ts, "Device turned on", LogLevel::Info, "User initiated");
        assert_eq!(log.date_time, ts);
        assert_eq!(log.event, "Device turned on");
        assert_eq!(log.level, LogLevel::Info);
        assert_eq!(log.note, "User initiated");
    }

    #[test]
    fn should_roundtrip_level_codes() {
        for level in [LogLevel::Info, LogLevel::Warning, LogLevel::Error] {
            assert_eq!(LogLevel::from_code(level.code()), Some(level));
        }
    }

    #[test]
    fn should_reject_unknown_level_code() {
        assert_eq!(LogLevel::from_code(3), None);
    }

    #[test]
    fn should_serialize_level_lowercase() {
        let json = serde_json::to_string(&LogLevel::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
