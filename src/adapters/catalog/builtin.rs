//! Compiled-in catalog source.

use crate::domain::catalog::{Catalog, CatalogVariant};
use crate::domain::foundation::DomainError;
use crate::ports::CatalogSource;

/// Serves one of the built-in skill lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog {
    variant: CatalogVariant,
}

impl BuiltinCatalog {
    pub fn new(variant: CatalogVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> CatalogVariant {
        self.variant
    }
}

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<Catalog, DomainError> {
        Ok(Catalog::builtin(self.variant))
    }

    fn describe(&self) -> String {
        format!("builtin:{}", self.variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_requested_variant() {
        let catalog = BuiltinCatalog::new(CatalogVariant::Short).load().unwrap();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.contains("Teacher"));
    }

    #[test]
    fn default_is_full_list() {
        let source = BuiltinCatalog::default();
        assert_eq!(source.load().unwrap().len(), 7);
        assert_eq!(source.describe(), "builtin:full");
    }
}
