//! Opaque snapshot token.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoded snapshot, safe to place unescaped in a URL query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotToken(String);

impl SnapshotToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for SnapshotToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for SnapshotToken {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl AsRef<str> for SnapshotToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SnapshotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
