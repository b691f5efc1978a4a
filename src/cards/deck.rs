//! Deck construction and shuffling.

use crate::core::GameRng;
use crate::rules::RuleSet;

use super::card::{Card, CardId, Rank, Suit};

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Build one of each (suit, rank) pair, valued for `ruleset`.
///
/// Ids run 1..=52 in suit-major order: hearts A-K, diamonds A-K, ...
#[must_use]
pub fn build_deck(ruleset: RuleSet) -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| (suit, rank)))
        .enumerate()
        .map(|(i, (suit, rank))| {
            Card::new(CardId::new(i as u8 + 1), suit, rank, ruleset.effect_value(rank))
        })
        .collect()
}

/// Return a uniformly permuted copy of `deck`.
#[must_use]
pub fn shuffle(mut deck: Vec<Card>, rng: &mut GameRng) -> Vec<Card> {
    rng.shuffle(&mut deck);
    deck
}
