//! Core engine types: players, state, actions, RNG, configuration.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{ConfigError, SessionConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, COMPUTER_CONTEXT, SHUFFLE_CONTEXT};
pub use state::{Direction, EndReason, GameState, GameStatus, IntegrityError};
