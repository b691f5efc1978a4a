//! Table fixtures shared by the integration tests.

#![allow(dead_code)]

use ninety_nine::cards::{build_deck, Card, Rank, Suit};
use ninety_nine::core::{GameState, Player, PlayerId};
use ninety_nine::rules::RuleSet;

/// The card of `rank` and `suit` from a `ruleset` deck.
pub fn card(ruleset: RuleSet, rank: Rank, suit: Suit) -> Card {
    build_deck(ruleset)
        .into_iter()
        .find(|c| c.rank == rank && c.suit == suit)
        .expect("every rank and suit is in the deck")
}

/// Builds a started game with chosen hands and center card.
///
/// Cards not placed anywhere fill the draw pile up to `pile` cards and the
/// rest go to the discard pile, so every table holds all 52 cards.
pub struct Table {
    ruleset: RuleSet,
    hands: Vec<Vec<(Rank, Suit)>>,
    center: Option<(Rank, Suit)>,
    pile: usize,
    total: i32,
    current: usize,
}

impl Table {
    pub fn new(ruleset: RuleSet) -> Self {
        Self {
            ruleset,
            hands: Vec::new(),
            center: None,
            pile: 0,
            total: 0,
            current: 0,
        }
    }

    pub fn hand(mut self, cards: &[(Rank, Suit)]) -> Self {
        self.hands.push(cards.to_vec());
        self
    }

    /// Add `count` seats holding a single low card each, spread over suits
    /// other than those already used.
    pub fn filler_seats(mut self, count: usize) -> Self {
        let fillers = [
            (Rank::Two, Suit::Spades),
            (Rank::Three, Suit::Spades),
            (Rank::Six, Suit::Spades),
            (Rank::Seven, Suit::Spades),
        ];
        for filler in fillers.iter().take(count) {
            self.hands.push(vec![*filler]);
        }
        self
    }

    pub fn center(mut self, rank: Rank, suit: Suit) -> Self {
        self.center = Some((rank, suit));
        self
    }

    pub fn pile(mut self, cards: usize) -> Self {
        self.pile = cards;
        self
    }

    pub fn total(mut self, total: i32) -> Self {
        self.total = total;
        self
    }

    pub fn current(mut self, seat: usize) -> Self {
        self.current = seat;
        self
    }

    pub fn build(self) -> GameState {
        let mut rest = build_deck(self.ruleset);
        let mut take = |rank: Rank, suit: Suit| -> Card {
            let pos = rest
                .iter()
                .position(|c| c.rank == rank && c.suit == suit)
                .expect("card used twice in a fixture");
            rest.remove(pos)
        };

        let players: Vec<Player> = self
            .hands
            .iter()
            .enumerate()
            .map(|(seat, hand)| {
                let cards: Vec<Card> = hand.iter().map(|&(r, s)| take(r, s)).collect();
                Player::new(PlayerId::new(seat as u8)).with_hand(cards)
            })
            .collect();
        let center = self.center.map(|(r, s)| take(r, s));

        let discard = rest.split_off(self.pile.min(rest.len()));
        let mut state = GameState::new(players, rest, center).start();
        state.discard_pile = discard.into_iter().collect();
        state.running_total = self.total;
        state.current_player_index = self.current;
        state
    }
}

/// Id of the card of `rank` and `suit` in `state`'s deck.
pub fn id_of(state: &GameState, rank: Rank, suit: Suit) -> ninety_nine::cards::CardId {
    state
        .players
        .iter()
        .flat_map(|p| p.hand.iter())
        .chain(state.draw_pile.iter())
        .chain(state.discard_pile.iter())
        .chain(state.center_card.iter())
        .find(|c| c.rank == rank && c.suit == suit)
        .map(|c| c.id)
        .expect("every card is somewhere on the table")
}
