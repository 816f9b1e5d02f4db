//! Typed integer identifier newtypes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw numeric identifier.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Access the raw numeric value.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }

            /// The identifier following this one, `None` once the id space
            /// is exhausted.
            #[must_use]
            pub const fn checked_next(self) -> Option<Self> {
                match self.0.checked_add(1) {
                    Some(value) => Some(Self(value)),
                    None => None,
                }
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Household`](crate::household::Household).
    HouseholdId
);

define_id!(
    /// Identifier of a [`Room`](crate::room::Room), unique within a household.
    RoomId
);

define_id!(
    /// Identifier of a [`Device`](crate::device::Device). Stable for the
    /// device's lifetime and the sole basis of device equality.
    DeviceId
);

define_id!(
    /// Identifier of a [`User`](crate::user::User).
    UserId
);

define_id!(
    /// Identifier of a [`Scene`](crate::scene::Scene), unique within a household.
    SceneId
);

define_id!(
    /// Identifier of a [`Manufacturer`](crate::manufacturer::Manufacturer).
    ManufacturerId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = DeviceId::new(42);
        let parsed: DeviceId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let json = serde_json::to_string(&SceneId::new(1)).unwrap();
        assert_eq!(json, "1");
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_text() {
        assert!(UserId::from_str("admin").is_err());
    }

    #[test]
    fn should_return_following_id_from_checked_next() {
        assert_eq!(UserId::new(1).checked_next(), Some(UserId::new(2)));
    }

    #[test]
    fn should_return_none_from_checked_next_when_id_space_exhausted() {
        assert_eq!(UserId::new(u32::MAX).checked_next(), None);
    }

    #[test]
    fn should_order_by_numeric_value() {
        assert!(RoomId::new(2) < RoomId::new(10));
    }
}
