//! Players and their hands.
//!
//! ## PlayerId
//!
//! Seat index wrapper. A session seats 2-4 players at ids `0..player_count`
//! and the id never changes for the life of the session.
//!
//! ## Player
//!
//! Seat, display name, hand and whether the computer heuristic drives it.
//! The hand is an `im::Vector` so each state snapshot shares structure with
//! the previous one.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Player identifier, equal to the seat index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All seats of a `player_count`-player table.
    ///
    /// ```
    /// use ninety_nine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player-{}", self.0 + 1)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Hand in deal/draw order. Order only matters for display.
    pub hand: Vector<Card>,
    pub is_computer: bool,
}

impl Player {
    /// Human player with an empty hand and the default name.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: default_name(id),
            hand: Vector::new(),
            is_computer: false,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn computer(mut self, is_computer: bool) -> Self {
        self.is_computer = is_computer;
        self
    }

    #[must_use]
    pub fn with_hand(mut self, hand: impl IntoIterator<Item = Card>) -> Self {
        self.hand = hand.into_iter().collect();
        self
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn find_card(&self, card: CardId) -> Option<(usize, &Card)> {
        self.hand.iter().enumerate().find(|(_, c)| c.id == card)
    }

    #[must_use]
    pub fn holds(&self, card: CardId) -> bool {
        self.find_card(card).is_some()
    }
}

/// Display name used when the config supplies none.
#[must_use]
pub fn default_name(id: PlayerId) -> String {
    format!("Player {}", id.0 + 1)
}
