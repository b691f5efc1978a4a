//! Rules of 99.
//!
//! - `ruleset`: the three rulesets and their per-card effects
//! - `engine`: the `RulesEngine` trait and its transitions
//! - `ninety_nine`: the configurable engine used by sessions
//!
//! Everything here is synchronous and side-effect free apart from logging:
//! transitions take a `GameState` and return a new one.

pub mod engine;
pub mod ninety_nine;
pub mod ruleset;
mod turn;

pub use engine::{GameResult, PlayRejection, RulesEngine};
pub use ninety_nine::NinetyNine;
pub use ruleset::{
    clamp_total, BustWinnerPolicy, FourCardMode, RuleSet, TurnEffect, MAX_TOTAL, MIN_TOTAL,
};
