//! Game state snapshots.
//!
//! ## GameState
//!
//! Everything about a game at one moment:
//! - Seated players and their hands
//! - Current player, direction of play, round counter
//! - Center card, draw pile, discard pile, running total
//! - Status and, once ended, the winner and why
//! - History of applied actions
//!
//! Transitions never mutate a state in place: they clone and return a new
//! snapshot. Hands, the pile and the history are `im` persistent vectors,
//! so a clone is O(1) and unchanged parts are shared between snapshots.
//!
//! ## Invariants
//!
//! For every state reachable from a dealt deck:
//! - cards in hands + draw pile + center card + discard pile = 52, ids unique
//! - `running_total` in `[0, 99]`
//! - `current_player_index < players.len()`
//! - `winner.is_some()` exactly when `status == Ended`
//!
//! [`GameState::check_integrity`] verifies all four.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::ActionRecord;
use super::player::{Player, PlayerId};
use crate::cards::{Card, CardId, DECK_SIZE};
use crate::rules::{MAX_TOTAL, MIN_TOTAL};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Dealt but not started.
    #[default]
    Waiting,
    InProgress,
    Ended,
}

/// Direction in which turns pass around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Increasing seat index.
    #[default]
    Clockwise,
    /// Decreasing seat index.
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EndReason {
    /// The winner emptied their hand.
    EmptyHand,
    /// `actor` pushed the total past 99.
    Bust { actor: PlayerId },
    /// Nobody could play or draw for a full round of passes.
    Blocked,
}

/// Integrity violation found by [`GameState::check_integrity`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("expected {expected} cards in play, found {actual}")]
    CardCount { expected: usize, actual: usize },
    #[error("{0} appears more than once")]
    DuplicateCard(CardId),
    #[error("running total {0} outside [0, 99]")]
    TotalOutOfRange(i32),
    #[error("current player index {index} out of range for {players} players")]
    CurrentOutOfRange { index: usize, players: usize },
    #[error("winner is {winner:?} but status is {status:?}")]
    WinnerMismatch {
        winner: Option<PlayerId>,
        status: GameStatus,
    },
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seated players; length fixed at session start.
    pub players: Vector<Player>,

    /// Index into `players` of the player whose turn it is.
    pub current_player_index: usize,

    /// Last card played (or the seeded opening card).
    pub center_card: Option<Card>,

    /// Undealt cards, drawn from the front.
    pub draw_pile: Vector<Card>,

    /// Center cards covered by later plays, oldest first.
    pub discard_pile: Vector<Card>,

    pub running_total: i32,

    pub status: GameStatus,

    /// Set exactly when `status` is `Ended`.
    pub winner: Option<PlayerId>,

    pub end_reason: Option<EndReason>,

    /// Starts at 1; increments each time play passes seat 0.
    pub round: u32,

    pub direction: Direction,

    /// Passes since the last play or draw.
    pub consecutive_passes: u32,

    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// A dealt table waiting to start, player 0 to act.
    #[must_use]
    pub fn new(players: Vec<Player>, draw_pile: Vec<Card>, center_card: Option<Card>) -> Self {
        Self {
            players: players.into_iter().collect(),
            current_player_index: 0,
            center_card,
            draw_pile: draw_pile.into_iter().collect(),
            discard_pile: Vector::new(),
            running_total: MIN_TOTAL,
            status: GameStatus::Waiting,
            winner: None,
            end_reason: None,
            round: 1,
            direction: Direction::Clockwise,
            consecutive_passes: 0,
            history: Vector::new(),
        }
    }

    /// Move a waiting game into play. Any other status is left alone.
    #[must_use]
    pub fn start(mut self) -> Self {
        if self.status == GameStatus::Waiting {
            self.status = GameStatus::InProgress;
        }
        self
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.current_player().map(|p| p.id)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Ended
    }

    /// Cards in hands, both piles and the center.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.players.iter().map(Player::hand_size).sum::<usize>()
            + self.draw_pile.len()
            + self.discard_pile.len()
            + usize::from(self.center_card.is_some())
    }

    /// Seat reached by moving `steps` seats from `from` in the current direction.
    #[must_use]
    pub fn seat_after(&self, from: usize, steps: usize) -> usize {
        let n = self.player_count();
        if n == 0 {
            return 0;
        }
        let steps = steps % n;
        match self.direction {
            Direction::Clockwise => (from + steps) % n,
            Direction::CounterClockwise => (from + n - steps) % n,
        }
    }

    /// Check the state invariants.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        let actual = self.card_count();
        if actual != DECK_SIZE {
            return Err(IntegrityError::CardCount {
                expected: DECK_SIZE,
                actual,
            });
        }

        let mut seen = FxHashSet::default();
        let all_cards = self
            .players
            .iter()
            .flat_map(|p| p.hand.iter())
            .chain(self.draw_pile.iter())
            .chain(self.discard_pile.iter())
            .chain(self.center_card.iter());
        for card in all_cards {
            if !seen.insert(card.id) {
                return Err(IntegrityError::DuplicateCard(card.id));
            }
        }

        if !(MIN_TOTAL..=MAX_TOTAL).contains(&self.running_total) {
            return Err(IntegrityError::TotalOutOfRange(self.running_total));
        }

        if self.current_player_index >= self.player_count() {
            return Err(IntegrityError::CurrentOutOfRange {
                index: self.current_player_index,
                players: self.player_count(),
            });
        }

        if self.winner.is_some() != (self.status == GameStatus::Ended) {
            return Err(IntegrityError::WinnerMismatch {
                winner: self.winner,
                status: self.status,
            });
        }

        Ok(())
    }
}
