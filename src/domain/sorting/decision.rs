//! Votes and per-round decision maps.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::Intensity;

/// The boolean half of a vote. Also used as the press direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Yes,
    No,
}

impl Choice {
    pub fn from_yes(yes: bool) -> Self {
        if yes {
            Choice::Yes
        } else {
            Choice::No
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Choice::Yes)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Choice::Yes => "yes",
            Choice::No => "no",
        };
        write!(f, "{}", s)
    }
}

/// A recorded vote for one item in one round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub choice: Choice,
    pub intensity: Intensity,
}

impl Decision {
    pub fn new(choice: Choice, intensity: Intensity) -> Self {
        Self { choice, intensity }
    }

    pub fn yes(intensity: Intensity) -> Self {
        Self::new(Choice::Yes, intensity)
    }

    pub fn no(intensity: Intensity) -> Self {
        Self::new(Choice::No, intensity)
    }

    pub fn is_yes(&self) -> bool {
        self.choice.is_yes()
    }
}

/// Decisions of one round, keyed by skill name.
///
/// A name is present if and only if the round recorded a vote for it, and
/// a recorded decision is never overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionMap {
    entries: HashMap<String, Decision>,
}

impl DecisionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a decision unless one already exists for the name.
    ///
    /// Returns false when the name was already decided.
    pub fn record(&mut self, name: impl Into<String>, decision: Decision) -> bool {
        use std::collections::hash_map::Entry;
        match self.entries.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(decision);
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Decision> {
        self.entries.get(name)
    }

    /// Absent names count as "no".
    pub fn is_yes(&self, name: &str) -> bool {
        self.get(name).map(Decision::is_yes).unwrap_or(false)
    }

    /// Absent names count as zero intensity.
    pub fn intensity(&self, name: &str) -> Intensity {
        self.get(name).map(|d| d.intensity).unwrap_or(Intensity::ZERO)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(String, Decision)> for DecisionMap {
    fn from_iter<I: IntoIterator<Item = (String, Decision)>>(iter: I) -> Self {
        let mut map = DecisionMap::new();
        for (name, decision) in iter {
            map.record(name, decision);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_inserts_first_decision() {
        let mut map = DecisionMap::new();
        assert!(map.record("Connector", Decision::yes(Intensity::new(80.0))));
        assert_eq!(map.len(), 1);
        assert!(map.is_yes("Connector"));
        assert_eq!(map.intensity("Connector").value(), 80.0);
    }

    #[test]
    fn record_never_overwrites() {
        let mut map = DecisionMap::new();
        map.record("Connector", Decision::yes(Intensity::new(80.0)));
        assert!(!map.record("Connector", Decision::no(Intensity::ZERO)));
        assert!(map.is_yes("Connector"));
        assert_eq!(map.intensity("Connector").value(), 80.0);
    }

    #[test]
    fn absent_names_read_as_no_with_zero_intensity() {
        let map = DecisionMap::new();
        assert!(!map.is_yes("Ghost"));
        assert_eq!(map.intensity("Ghost"), Intensity::ZERO);
        assert!(!map.contains("Ghost"));
    }

    #[test]
    fn from_iterator_keeps_first_occurrence() {
        let map: DecisionMap = vec![
            ("Maker".to_string(), Decision::no(Intensity::new(5.0))),
            ("Maker".to_string(), Decision::yes(Intensity::new(90.0))),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.len(), 1);
        assert!(!map.is_yes("Maker"));
    }

    #[test]
    fn choice_from_yes() {
        assert_eq!(Choice::from_yes(true), Choice::Yes);
        assert_eq!(Choice::from_yes(false), Choice::No);
        assert_eq!(Choice::No.to_string(), "no");
    }
}
