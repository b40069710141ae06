//! Strongly-typed identifiers.
//!
//! Records in the assessment store are keyed by auto-incremented integers,
//! so every id wraps a `u64` and displays as the bare number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed ID wrapper.
macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[doc = concat!("Identifier of a ", $label, " record.")]
        #[derive(
            Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw store id.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Parse from a decimal string.
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                s.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat)
            }

            /// Get the raw value.
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

/// Error parsing an ID.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdParseError {
    /// The ID format is invalid.
    #[error("invalid ID format")]
    InvalidFormat,
}

define_id!(PiaId, "assessment");
define_id!(RevisionId, "revision");
define_id!(MeasureId, "measure");
define_id!(AnswerId, "answer");
define_id!(KnowledgeBaseId, "knowledge base");
define_id!(KnowledgeEntryId, "knowledge entry");
