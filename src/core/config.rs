//! Session configuration.
//!
//! A `SessionConfig` fixes everything that must not change mid-game: seat
//! count, hand size, ruleset and its open policy choices, which seats the
//! computer plays, and the master seed. Build it in code with the `with_*`
//! methods or load it from JSON; either way call [`SessionConfig::validate`]
//! (session construction does) before use.
//!
//! ```
//! use ninety_nine::core::SessionConfig;
//! use ninety_nine::rules::RuleSet;
//!
//! let config = SessionConfig::default()
//!     .with_player_count(4)
//!     .with_ruleset(RuleSet::Simple)
//!     .with_seed(7);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.computer_seats(), vec![1, 2, 3]);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::{default_name, PlayerId};
use crate::cards::HAND_SIZE;
use crate::rules::{BustWinnerPolicy, FourCardMode, RuleSet};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Default chance that the computer draws as exploration.
pub const DEFAULT_DRAW_PROBABILITY: f64 = 0.3;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("player count {0} outside 2..=4")]
    PlayerCount(usize),
    #[error("hand size must be at least 1")]
    HandSize,
    #[error("computer seat {seat} does not exist at a {players}-player table")]
    ComputerSeat { seat: usize, players: usize },
    #[error("{given} names given for {players} players")]
    NameCount { given: usize, players: usize },
    #[error("draw probability {0} outside [0, 1]")]
    DrawProbability(f64),
    #[error("invalid config json: {0}")]
    Json(String),
}

/// Configuration fixed at session start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seats at the table (2-4).
    pub player_count: usize,

    /// Cards dealt per hand; hands are topped back up to this size.
    pub hand_size: usize,

    pub ruleset: RuleSet,

    /// Winner selection when a player busts.
    pub bust_winner: BustWinnerPolicy,

    /// Effect of a 4 under the full-specials ruleset.
    pub four_card: FourCardMode,

    /// Seats played by the computer. `None` means every seat but 0.
    pub computer_seats: Option<Vec<usize>>,

    /// Display names by seat. Empty means "Player N".
    pub player_names: Vec<String>,

    /// Master seed for shuffling and computer decisions.
    pub seed: u64,

    /// Chance that the computer draws as exploration.
    pub draw_probability: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            hand_size: HAND_SIZE,
            ruleset: RuleSet::default(),
            bust_winner: BustWinnerPolicy::default(),
            four_card: FourCardMode::default(),
            computer_seats: None,
            player_names: Vec::new(),
            seed: 42,
            draw_probability: DEFAULT_DRAW_PROBABILITY,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    pub fn with_ruleset(mut self, ruleset: RuleSet) -> Self {
        self.ruleset = ruleset;
        self
    }

    pub fn with_bust_winner(mut self, policy: BustWinnerPolicy) -> Self {
        self.bust_winner = policy;
        self
    }

    pub fn with_four_card(mut self, mode: FourCardMode) -> Self {
        self.four_card = mode;
        self
    }

    pub fn with_computer_seats(mut self, seats: Vec<usize>) -> Self {
        self.computer_seats = Some(seats);
        self
    }

    /// Every seat played by the computer.
    pub fn all_computer(mut self) -> Self {
        self.computer_seats = Some((0..self.player_count).collect());
        self
    }

    pub fn with_player_names(mut self, names: Vec<String>) -> Self {
        self.player_names = names;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_draw_probability(mut self, probability: f64) -> Self {
        self.draw_probability = probability;
        self
    }

    /// Seats played by the computer, sorted.
    pub fn computer_seats(&self) -> Vec<usize> {
        let mut seats = match &self.computer_seats {
            Some(seats) => seats.clone(),
            None => (1..self.player_count).collect(),
        };
        seats.sort_unstable();
        seats.dedup();
        seats
    }

    pub fn is_computer(&self, seat: usize) -> bool {
        self.computer_seats().contains(&seat)
    }

    /// Display name for a seat.
    pub fn player_name(&self, id: PlayerId) -> String {
        self.player_names
            .get(id.index())
            .cloned()
            .unwrap_or_else(|| default_name(id))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::HandSize);
        }
        if let Some(&seat) = self
            .computer_seats()
            .iter()
            .find(|&&seat| seat >= self.player_count)
        {
            return Err(ConfigError::ComputerSeat {
                seat,
                players: self.player_count,
            });
        }
        if !self.player_names.is_empty() && self.player_names.len() != self.player_count {
            return Err(ConfigError::NameCount {
                given: self.player_names.len(),
                players: self.player_count,
            });
        }
        if !(0.0..=1.0).contains(&self.draw_probability) {
            return Err(ConfigError::DrawProbability(self.draw_probability));
        }
        Ok(())
    }
}
