//! Skill catalog.
//!
//! The catalog is the immutable, ordered list of skills a session sorts.
//! Skill names are the identity used everywhere else (decision maps,
//! quadrant lists, snapshot tokens), so the catalog guarantees they are
//! non-empty and unique.

mod builtin;
mod skill;

pub use builtin::CatalogVariant;
pub use skill::Skill;

use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

/// Validated, immutable list of skills.
///
/// # Invariants
///
/// - at least one skill
/// - every name is non-empty (after trimming)
/// - names are unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    skills: Vec<Skill>,
}

impl Catalog {
    /// Builds a catalog, validating the invariants above.
    pub fn new(skills: Vec<Skill>) -> Result<Self, ValidationError> {
        if skills.is_empty() {
            return Err(ValidationError::empty_field("catalog"));
        }

        let mut seen = HashSet::with_capacity(skills.len());
        for skill in &skills {
            if skill.name().trim().is_empty() {
                return Err(ValidationError::empty_field("skill.name"));
            }
            if !seen.insert(skill.name()) {
                return Err(ValidationError::duplicate("skill.name", skill.name()));
            }
        }

        Ok(Self { skills })
    }

    /// Returns the built-in catalog for a variant.
    pub fn builtin(variant: CatalogVariant) -> Self {
        Self {
            skills: variant.skills(),
        }
    }

    /// Looks a skill up by name.
    pub fn find(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Skills in catalog order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Always false for a constructed catalog; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
