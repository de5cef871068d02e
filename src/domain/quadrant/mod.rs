//! Quadrant classification.
//!
//! The two round results cross into four fixed buckets:
//!
//! | enjoy | good | quadrant |
//! |-------|------|----------|
//! | yes | yes | Superpowers |
//! | yes | no | Growth |
//! | no | yes | Burnout |
//! | no | no | Avoid |

mod classifier;
mod summary;

pub use classifier::classify;
pub use summary::{IntensityRecord, QuadrantSummary};

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four outcome buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadrant {
    Superpowers,
    Growth,
    Burnout,
    Avoid,
}

impl Quadrant {
    /// All quadrants in their canonical order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Superpowers,
        Quadrant::Growth,
        Quadrant::Burnout,
        Quadrant::Avoid,
    ];

    /// Buckets one item by its two round answers.
    pub fn from_axes(enjoy: bool, good: bool) -> Self {
        match (enjoy, good) {
            (true, true) => Quadrant::Superpowers,
            (true, false) => Quadrant::Growth,
            (false, true) => Quadrant::Burnout,
            (false, false) => Quadrant::Avoid,
        }
    }

    /// Key used in snapshot tokens.
    pub fn key(&self) -> &'static str {
        match self {
            Quadrant::Superpowers => "superpowers",
            Quadrant::Growth => "growth",
            Quadrant::Burnout => "burnout",
            Quadrant::Avoid => "avoid",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Quadrant::Superpowers => "Superpowers",
            Quadrant::Growth => "Growth Zone",
            Quadrant::Burnout => "Burnout Risk",
            Quadrant::Avoid => "Delegate / Avoid",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Quadrant::Superpowers => "Love & Good",
            Quadrant::Growth => "Love & Bad",
            Quadrant::Burnout => "Hate & Good",
            Quadrant::Avoid => "Hate & Bad",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
