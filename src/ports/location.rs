//! Location Port - the address the session was opened from.
//!
//! Inbound snapshots arrive as the `data` query parameter; restart removes
//! it again without a reload.

use crate::domain::foundation::DomainError;

/// Query parameter carrying a snapshot token.
pub const DATA_PARAM: &str = "data";

/// Read and rewrite the current address.
pub trait Location: Send + Sync {
    /// The full current address.
    fn href(&self) -> String;

    /// First value of a query parameter, if present.
    fn query_param(&self, key: &str) -> Option<String>;

    /// Replaces the address in place (no navigation).
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` if `url` cannot be parsed.
    fn replace(&self, url: &str) -> Result<(), DomainError>;
}
