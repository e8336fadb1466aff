//! Strongly-typed identifiers for domain entities
//!
//! Identifiers in the booking system are caller-supplied positive integers
//! (the database schema carries matching `CHECK (id > 0)` constraints).
//! Newtype wrappers provide type safety and prevent accidental mixing of
//! different identifier types; the fallible constructor makes non-positive
//! identifiers unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when constructing or parsing an identifier
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// The raw value was zero or negative
    #[error("{entity} identifier must be positive, got {value}")]
    NonPositive { entity: &'static str, value: i32 },

    /// The string could not be parsed as an integer
    #[error("Invalid {entity} identifier: {raw}")]
    Unparseable { entity: &'static str, raw: String },
}

macro_rules! define_entity_id {
    ($name:ident, $entity:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates an identifier from a raw value, rejecting non-positive input
            pub fn new(value: i32) -> Result<Self, IdentifierError> {
                if value <= 0 {
                    return Err(IdentifierError::NonPositive {
                        entity: $entity,
                        value,
                    });
                }
                Ok(Self(value))
            }

            /// Returns the raw integer value
            pub fn get(&self) -> i32 {
                self.0
            }

            /// Returns the entity name for display and error messages
            pub fn entity() -> &'static str {
                $entity
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $entity, self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip the entity prefix if present
                let raw = s.strip_prefix(concat!($entity, "-")).unwrap_or(s);
                let value = raw.parse::<i32>().map_err(|_| IdentifierError::Unparseable {
                    entity: $entity,
                    raw: s.to_string(),
                })?;
                Self::new(value)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = IdentifierError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> i32 {
                id.0
            }
        }
    };
}

define_entity_id!(OwnerId, "owner");
define_entity_id!(ApartmentId, "apartment");
define_entity_id!(CustomerId, "customer");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_id_rejects_zero() {
        assert_eq!(
            OwnerId::new(0),
            Err(IdentifierError::NonPositive {
                entity: "owner",
                value: 0
            })
        );
    }

    #[test]
    fn test_apartment_id_display() {
        let id = ApartmentId::new(42).unwrap();
        assert_eq!(id.to_string(), "apartment-42");
    }
}
