//! Owner identifier and the opaque owner record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier taken from the current navigation route.
///
/// Carried verbatim: no trimming, no validation, no percent-encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OwnerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for OwnerId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Owner record as returned by the customers service.
///
/// The shape is not interpreted here; the JSON document is kept as received
/// and serializes back to the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(serde_json::Value);

impl Owner {
    pub fn from_value(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Parse a response body.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body).map(Self)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Top-level field lookup, for views that want to read named attributes.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }
}
