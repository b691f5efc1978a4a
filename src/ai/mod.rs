//! Computer opponents.

pub mod heuristic;

pub use heuristic::{
    card_risk, decide_computer_action, risk, ComputerPolicy, RiskHeuristic, UniformPolicy,
    MIN_HAND_BEFORE_DRAW, SAFE_TOTAL,
};
