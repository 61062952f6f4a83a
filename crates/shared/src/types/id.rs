//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `TaskId` where a
//! `CategoryId` is expected. The backend and the demo fixtures hand out
//! opaque string identifiers (`cat-1`, `42`, ...), so the wrappers are
//! string-backed. Locally generated IDs are `<prefix>-<uuid v7>`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $prefix:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        // The backend serializes primary keys as integers.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match RawId::deserialize(deserializer)? {
                    RawId::Text(value) => Ok(Self(value)),
                    RawId::Number(value) => Ok(Self(value.to_string())),
                }
            }
        }

        impl $name {
            /// Prefix used for locally generated IDs.
            pub const PREFIX: &'static str = $prefix;

            /// Generates a new collision-resistant ID (prefix + UUID v7).
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}-{}", Self::PREFIX, Uuid::now_v7()))
            }

            /// Wraps an existing identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

typed_id!(ProjectId, "project", "Unique identifier for a film project.");
typed_id!(CategoryId, "cat", "Unique identifier for a budget category.");
typed_id!(TransactionId, "tx", "Unique identifier for a budget transaction.");
typed_id!(TaskId, "task", "Unique identifier for a timeline task.");
typed_id!(MilestoneId, "milestone", "Unique identifier for a timeline milestone.");
typed_id!(UserId, "user", "Unique identifier for a dashboard user.");
