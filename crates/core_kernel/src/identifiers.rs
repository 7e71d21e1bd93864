//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around the store-assigned numeric keys prevent
//! accidental mixing of different identifier types (a `ClaimId` can never
//! be passed where a `CustomerId` is expected).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a store-assigned numeric key
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying numeric value
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the entity label for diagnostics
            pub fn label() -> &'static str {
                $label
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(ClaimId, "claim");
define_id!(CustomerId, "customer");
define_id!(StatusEntryId, "status entry");
define_id!(AttachmentId, "attachment");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_id_display() {
        let id = ClaimId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_parsing() {
        let original = ClaimId::new(7);
        let parsed: ClaimId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_numeric_conversion() {
        let id = CustomerId::from(99);
        let back: i64 = id.into();
        assert_eq!(back, 99);
    }

    #[test]
    fn test_entry_id_ordering() {
        assert!(StatusEntryId::new(2) > StatusEntryId::new(1));
    }
}
