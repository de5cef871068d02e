//! Quadrant classifier.

use super::{IntensityRecord, Quadrant, QuadrantSummary};
use crate::domain::sorting::{DecisionMap, Deck};

/// Buckets every deck item by its two round answers.
///
/// Pure: depends only on the deck order and both maps. Missing decisions
/// read as "no" with zero intensity. List order follows deck order.
pub fn classify(deck: &Deck, enjoy: &DecisionMap, good: &DecisionMap) -> QuadrantSummary {
    let mut summary = QuadrantSummary::new();
    for skill in deck.iter() {
        let name = skill.name();
        let quadrant = Quadrant::from_axes(enjoy.is_yes(name), good.is_yes(name));
        let record = IntensityRecord::new(enjoy.intensity(name), good.intensity(name));
        summary.insert(quadrant, skill.clone(), record);
    }
    summary
}
