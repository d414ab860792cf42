//! Strongly-typed identifiers used across the domain.
//!
//! All identifiers are opaque strings assigned by the backend (directory
//! object ids, password credential key ids). The client never generates or
//! interprets them, so there is no UUID parsing here.

use serde::{Deserialize, Serialize};

/// Identifier of a service principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpnId(String);

/// Identifier of a client secret (password credential key id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretKeyId(String);

/// Identifier of an owner (user principal object id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

macro_rules! impl_string_id {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_string_id!(SpnId);
impl_string_id!(SecretKeyId);
impl_string_id!(OwnerId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_transparently() {
        let id = SpnId::new("spn-001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"spn-001\"");

        let back: SpnId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
