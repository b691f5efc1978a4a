//! # ninety-nine
//!
//! Rules engine, computer opponent and session controller for the card game
//! 99, for 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every transition takes a `GameState` and
//!    returns a new one. Invalid requests return an unchanged copy.
//!
//! 2. **One ruleset per session**: the three known variants of 99 are a
//!    single `RuleSet` chosen at session start, never mixed per call.
//!
//! 3. **Deterministic by seed**: shuffling and computer decisions draw from
//!    seeded streams, so any game can be replayed from its config.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: hands, piles and history are `im`
//!   vectors, so a snapshot per transition is O(1).
//!
//! - **Single Writer**: only `Session` commits a new current state.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, RNG, configuration
//! - `cards`: cards, deck construction, dealing
//! - `rules`: rulesets and the `RulesEngine` transitions
//! - `ai`: computer player policies
//! - `session`: the session controller
//! - `sim`: headless computer-vs-computer games

pub mod core;
pub mod cards;
pub mod rules;
pub mod ai;
pub mod session;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, Direction, EndReason, GameRng, GameState,
    GameStatus, IntegrityError, Player, PlayerId, SessionConfig,
};

pub use crate::cards::{build_deck, deal, shuffle, Card, CardId, Rank, Suit};

pub use crate::rules::{
    BustWinnerPolicy, FourCardMode, GameResult, NinetyNine, PlayRejection, RuleSet, RulesEngine,
    TurnEffect,
};

pub use crate::ai::{decide_computer_action, ComputerPolicy, RiskHeuristic, UniformPolicy};

pub use crate::session::{initialize_session, Session, TurnOutcome};

pub use crate::sim::{play_out, PlayOutSummary};
