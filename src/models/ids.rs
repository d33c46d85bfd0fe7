//! Strongly-typed ID wrappers for all entity types
//!
//! IDs are small sequential integers so they can be typed on the command
//! line. Newtype wrappers keep IDs from different collections apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identifier
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the raw identifier
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(MonthlyCategoryId);
define_id!(FixedCategoryId);
define_id!(TransactionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(TransactionId::new(42).to_string(), "42");
    }

    #[test]
    fn test_id_parse() {
        let id: MonthlyCategoryId = " 7 ".parse().unwrap();
        assert_eq!(id.value(), 7);
        assert!("rent".parse::<MonthlyCategoryId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = FixedCategoryId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let deserialized: FixedCategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
