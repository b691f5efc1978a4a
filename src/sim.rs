//! Headless computer-vs-computer play.
//!
//! Every seat is handed to the session's computer policy and the game is
//! run to completion (or until `max_steps` turns). Used by the
//! `ninety-nine-sim` binary and by the integration tests.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{ConfigError, EndReason, GameState, PlayerId, SessionConfig};
use crate::session::{Session, TurnOutcome};

/// Turn cap used when the caller has no better bound.
pub const DEFAULT_MAX_STEPS: usize = 1_000;

/// How a headless game went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutSummary {
    pub seed: u64,
    /// `None` when the game hit the step cap or stalled.
    pub winner: Option<PlayerId>,
    pub reason: Option<EndReason>,
    /// Applied transitions.
    pub steps: usize,
    pub final_total: i32,
    pub rounds: u32,
    pub stalled: bool,
}

impl PlayOutSummary {
    fn from_state(seed: u64, state: &GameState, steps: usize, stalled: bool) -> Self {
        Self {
            seed,
            winner: state.winner,
            reason: state.end_reason,
            steps,
            final_total: state.running_total,
            rounds: state.round,
            stalled,
        }
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.winner.is_some()
    }
}

/// Play one game with every seat computer-controlled.
pub fn play_out(config: &SessionConfig, max_steps: usize) -> Result<PlayOutSummary, ConfigError> {
    let config = config.clone().all_computer();
    let seed = config.seed;
    let mut session = Session::new(config)?;

    let (steps, outcome) = session.run_computers(max_steps);
    let stalled = matches!(outcome, TurnOutcome::Stalled { .. });
    let summary = PlayOutSummary::from_state(seed, session.state(), steps, stalled);

    info!(
        seed,
        steps,
        winner = ?summary.winner,
        total = summary.final_total,
        "play-out finished"
    );
    Ok(summary)
}

/// Play `games` games, seeding game `i` with `config.seed + i`.
pub fn play_many(config: &SessionConfig, games: u64, max_steps: usize) -> Result<Vec<PlayOutSummary>, ConfigError> {
    (0..games)
        .map(|i| {
            let seeded = config.clone().with_seed(config.seed.wrapping_add(i));
            play_out(&seeded, max_steps)
        })
        .collect()
}

/// Wins per seat across `summaries`; index is the seat.
#[must_use]
pub fn win_counts(summaries: &[PlayOutSummary], player_count: usize) -> Vec<usize> {
    let mut wins = vec![0; player_count];
    for winner in summaries.iter().filter_map(|s| s.winner) {
        if let Some(slot) = wins.get_mut(winner.index()) {
            *slot += 1;
        }
    }
    wins
}
