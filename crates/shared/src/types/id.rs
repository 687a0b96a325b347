//! Typed IDs for type-safe references to dropdown/reference data.
//!
//! The reference-data service hands back opaque `{id, name}` pairs for
//! districts, talukas, constituencies, and implementing agencies. Typed IDs
//! prevent accidentally passing a `TalukaId` where a `DistrictId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! reference_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wraps an ID received from the reference-data service.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Unwraps to the raw UUID for outbound payloads.
            #[must_use]
            pub const fn into_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

reference_id!(DistrictId, "Unique identifier for a district.");
reference_id!(TalukaId, "Unique identifier for a taluka.");
reference_id!(
    ConstituencyId,
    "Unique identifier for an MLA/MLC constituency."
);
reference_id!(AgencyId, "Unique identifier for an implementing agency.");
reference_id!(WorkId, "Unique identifier for a sanctioned work.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_round_trip() {
        let district = DistrictId::new();
        let roundtrip = DistrictId::from_str(&district.to_string()).unwrap();
        assert_eq!(district, roundtrip);
    }

    #[test]
    fn test_from_uuid_preserves_value() {
        let uuid = Uuid::now_v7();
        assert_eq!(TalukaId::from_uuid(uuid).into_uuid(), uuid);
    }

    #[test]
    fn test_invalid_uuid_rejected() {
        assert!(WorkId::from_str("not-a-uuid").is_err());
    }
}
