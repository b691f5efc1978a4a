//! Dealing hands and turning up the opening center card.

use crate::core::{Player, PlayerId};
use crate::rules::RuleSet;

use super::card::Card;

/// Default cards per hand.
pub const HAND_SIZE: usize = 5;

/// Deal `hand_size` cards to each of `player_count` players.
///
/// Hands are consecutive blocks in deck order: player 0 takes the first
/// `hand_size` cards, player 1 the next block, and so on. A deck that runs
/// short leaves the later hands partial or empty. Returns the players and
/// the undealt remainder.
#[must_use]
pub fn deal(deck: &[Card], player_count: usize, hand_size: usize) -> (Vec<Player>, Vec<Card>) {
    let mut rest = deck;
    let players = PlayerId::all(player_count)
        .map(|id| {
            let take = hand_size.min(rest.len());
            let (hand, tail) = rest.split_at(take);
            rest = tail;
            Player::new(id).with_hand(hand.iter().copied())
        })
        .collect();

    (players, rest.to_vec())
}

/// Turn up the first non-special card of `pile` as the center card.
///
/// Special cards passed over go to the back of the pile in the order they
/// were turned, so no card leaves play. Rulesets that start without a
/// center card, or a pile with no plain card, yield `None` and the pile
/// unchanged.
#[must_use]
pub fn seed_center_card(pile: Vec<Card>, ruleset: RuleSet) -> (Option<Card>, Vec<Card>) {
    if !ruleset.seeds_center_card() {
        return (None, pile);
    }

    match pile.iter().position(|card| !ruleset.is_special(card.rank)) {
        Some(pos) => {
            let center = pile[pos];
            let mut rest: Vec<Card> = pile[pos + 1..].to_vec();
            rest.extend_from_slice(&pile[..pos]);
            (Some(center), rest)
        }
        None => (None, pile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{build_deck, CardId, Rank};

    #[test]
    fn test_deal_blocks_in_deck_order() {
        let deck = build_deck(RuleSet::FullSpecials);
        let (players, rest) = deal(&deck, 3, HAND_SIZE);

        assert_eq!(players.len(), 3);
        assert_eq!(rest.len(), 52 - 15);
        for (i, player) in players.iter().enumerate() {
            assert_eq!(player.id, PlayerId::new(i as u8));
            assert_eq!(player.hand_size(), HAND_SIZE);
            assert_eq!(player.hand[0].id, CardId::new((i * HAND_SIZE) as u8 + 1));
        }
        assert_eq!(rest[0].id, CardId::new(16));
    }

    #[test]
    fn test_deal_short_deck_fills_partially() {
        let deck = build_deck(RuleSet::FullSpecials);
        let (players, rest) = deal(&deck[..7], 2, HAND_SIZE);

        assert_eq!(players[0].hand_size(), 5);
        assert_eq!(players[1].hand_size(), 2);
        assert!(rest.is_empty());

        let (players, rest) = deal(&[], 4, HAND_SIZE);
        assert!(players.iter().all(|p| p.hand.is_empty()));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_seed_skips_special_cards() {
        // Hearts J, Q, K, then the ace of diamonds.
        let deck = build_deck(RuleSet::FullSpecials);
        let pile: Vec<Card> = deck[10..14].to_vec();
        let (center, rest) = seed_center_card(pile, RuleSet::FullSpecials);

        let center = center.unwrap();
        assert_eq!(center.rank, Rank::Ace);
        let ranks: Vec<_> = rest.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Jack, Rank::Queen, Rank::King]);
    }

    #[test]
    fn test_seed_not_required() {
        let pile = build_deck(RuleSet::Simple);
        let (center, rest) = seed_center_card(pile.clone(), RuleSet::Simple);
        assert!(center.is_none());
        assert_eq!(rest, pile);
    }

    #[test]
    fn test_seed_all_special_leaves_none() {
        let deck = build_deck(RuleSet::FullSpecials);
        let pile = vec![deck[3], deck[4], deck[12]];
        let (center, rest) = seed_center_card(pile.clone(), RuleSet::FullSpecials);
        assert!(center.is_none());
        assert_eq!(rest, pile);
    }
}
