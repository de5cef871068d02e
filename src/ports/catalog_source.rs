//! Catalog Source Port - where the immutable skill list is read from.

use crate::domain::catalog::Catalog;
use crate::domain::foundation::DomainError;

/// Supplies the catalog a session sorts.
///
/// Called once at startup; the result is shared read-only afterwards.
pub trait CatalogSource: Send + Sync {
    /// Load and validate the catalog
    ///
    /// # Errors
    ///
    /// - `CatalogUnavailable` if the source cannot be read
    /// - `CatalogMalformed` if the source cannot be parsed
    /// - `EmptyCatalog` / `DuplicateSkill` / `ValidationFailed` if the
    ///   skills break catalog invariants
    fn load(&self) -> Result<Catalog, DomainError>;

    /// Short human label for logs.
    fn describe(&self) -> String;
}
