//! Manufacturer — the read-only maker record shared by devices.

use serde::{Deserialize, Serialize};

use crate::error::{HomeSphereError, ValidationError};
use crate::id::ManufacturerId;

/// A device maker and the protocols its devices speak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: ManufacturerId,
    pub name: String,
    pub protocols: Vec<String>,
}

impl Manufacturer {
    /// Create a manufacturer from a comma-separated protocol list such as
    /// `"WiFi, ZigBee"`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] when `name` is empty.
    pub fn new(
        id: ManufacturerId,
        name: impl Into<String>,
        protocols: &str,
    ) -> Result<Self, HomeSphereError> {
        let manufacturer = Self {
            id,
            name: name.into(),
            protocols: parse_protocols(protocols),
        };
        if manufacturer.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(manufacturer)
    }

    /// Whether devices from this maker speak `protocol` (case-insensitive).
    #[must_use]
    pub fn supports(&self, protocol: &str) -> bool {
        self.protocols
            .iter()
            .any(|p| p.eq_ignore_ascii_case(protocol))
    }
}

fn parse_protocols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
