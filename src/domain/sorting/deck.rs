//! Deck randomizer.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::domain::catalog::{Catalog, Skill};

/// The shuffled working order of the catalog for one walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Skill>,
}

impl Deck {
    /// Fisher-Yates shuffle of the whole catalog.
    pub fn shuffled<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Self {
        let mut cards = catalog.skills().to_vec();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck in a fixed order.
    pub fn from_skills(cards: Vec<Skill>) -> Self {
        Self { cards }
    }

    /// Catalog order, unshuffled.
    pub fn in_catalog_order(catalog: &Catalog) -> Self {
        Self::from_skills(catalog.skills().to_vec())
    }

    pub fn get(&self, index: usize) -> Option<&Skill> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Skill] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.cards.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(Skill::name)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True if the deck holds every catalog skill exactly once.
    pub fn is_permutation_of(&self, catalog: &Catalog) -> bool {
        if self.cards.len() != catalog.len() {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.cards.len());
        self.cards
            .iter()
            .all(|card| catalog.contains(card.name()) && seen.insert(card.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogVariant;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffled_deck_is_a_permutation() {
        let catalog = Catalog::builtin(CatalogVariant::Short);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let deck = Deck::shuffled(&catalog, &mut rng);
            assert!(deck.is_permutation_of(&catalog));
        }
    }

    #[test]
    fn same_seed_same_order() {
        let catalog = Catalog::builtin(CatalogVariant::Full);
        let a = Deck::shuffled(&catalog, &mut StdRng::seed_from_u64(42));
        let b = Deck::shuffled(&catalog, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffling_eventually_changes_order() {
        let catalog = Catalog::builtin(CatalogVariant::Short);
        let original = Deck::in_catalog_order(&catalog);
        let mut rng = StdRng::seed_from_u64(1);
        let moved = (0..10).any(|_| Deck::shuffled(&catalog, &mut rng) != original);
        assert!(moved);
    }

    #[test]
    fn permutation_check_detects_duplicates_and_omissions() {
        let catalog = Catalog::builtin(CatalogVariant::Full);
        let mut cards = catalog.skills().to_vec();
        cards[1] = cards[0].clone();
        assert!(!Deck::from_skills(cards).is_permutation_of(&catalog));

        let short = catalog.skills()[..3].to_vec();
        assert!(!Deck::from_skills(short).is_permutation_of(&catalog));
    }

    #[test]
    fn permutation_check_rejects_foreign_skill() {
        let catalog = Catalog::builtin(CatalogVariant::Full);
        let mut cards = catalog.skills().to_vec();
        cards[0] = Skill::new("Ghost", "", "");
        assert!(!Deck::from_skills(cards).is_permutation_of(&catalog));
    }
}
