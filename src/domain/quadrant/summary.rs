//! QuadrantSummary value object.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Quadrant;
use crate::domain::catalog::Skill;
use crate::domain::foundation::Intensity;

/// Per-skill intensities from both rounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntensityRecord {
    pub enjoy: Intensity,
    pub good: Intensity,
}

impl IntensityRecord {
    pub fn new(enjoy: Intensity, good: Intensity) -> Self {
        Self { enjoy, good }
    }

    /// Sum of both rounds, 0 to 200.
    pub fn total(&self) -> f64 {
        self.enjoy.value() + self.good.value()
    }
}

/// Four disjoint skill lists plus an intensity record per skill.
///
/// # Invariants
///
/// - a skill name appears in at most one list
/// - every listed skill has an intensity record (zero when unknown)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadrantSummary {
    superpowers: Vec<Skill>,
    growth: Vec<Skill>,
    burnout: Vec<Skill>,
    avoid: Vec<Skill>,
    intensity: HashMap<String, IntensityRecord>,
}

impl QuadrantSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a skill to a quadrant.
    ///
    /// Returns false, leaving the summary untouched, if the name is already
    /// listed in any quadrant.
    pub fn insert(&mut self, quadrant: Quadrant, skill: Skill, record: IntensityRecord) -> bool {
        if self.intensity.contains_key(skill.name()) {
            return false;
        }
        self.intensity.insert(skill.name().to_string(), record);
        self.list_mut(quadrant).push(skill);
        true
    }

    /// Skills of a quadrant in insertion (deck) order.
    pub fn skills(&self, quadrant: Quadrant) -> &[Skill] {
        match quadrant {
            Quadrant::Superpowers => &self.superpowers,
            Quadrant::Growth => &self.growth,
            Quadrant::Burnout => &self.burnout,
            Quadrant::Avoid => &self.avoid,
        }
    }

    pub fn names(&self, quadrant: Quadrant) -> Vec<&str> {
        self.skills(quadrant).iter().map(Skill::name).collect()
    }

    /// Skills of a quadrant, strongest total intensity first.
    ///
    /// Ties keep insertion order.
    pub fn ranked(&self, quadrant: Quadrant) -> Vec<&Skill> {
        let mut ranked: Vec<&Skill> = self.skills(quadrant).iter().collect();
        ranked.sort_by(|a, b| {
            let ta = self.intensity_of(a.name()).total();
            let tb = self.intensity_of(b.name()).total();
            tb.total_cmp(&ta)
        });
        ranked
    }

    pub fn intensity(&self, name: &str) -> Option<&IntensityRecord> {
        self.intensity.get(name)
    }

    /// Intensity record, zero for unlisted names.
    pub fn intensity_of(&self, name: &str) -> IntensityRecord {
        self.intensity.get(name).copied().unwrap_or_default()
    }

    pub fn intensities(&self) -> &HashMap<String, IntensityRecord> {
        &self.intensity
    }

    /// Which quadrant lists the name, if any.
    pub fn quadrant_of(&self, name: &str) -> Option<Quadrant> {
        Quadrant::ALL
            .into_iter()
            .find(|q| self.skills(*q).iter().any(|s| s.name() == name))
    }

    /// Number of skills across all quadrants.
    pub fn len(&self) -> usize {
        Quadrant::ALL.iter().map(|q| self.skills(*q).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn list_mut(&mut self, quadrant: Quadrant) -> &mut Vec<Skill> {
        match quadrant {
            Quadrant::Superpowers => &mut self.superpowers,
            Quadrant::Growth => &mut self.growth,
            Quadrant::Burnout => &mut self.burnout,
            Quadrant::Avoid => &mut self.avoid,
        }
    }
}
