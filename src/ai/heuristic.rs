//! Computer player policies.
//!
//! - `RiskHeuristic`: the computer opponent. Decides between drawing and
//!   playing, then plays the card with the lowest adjusted risk.
//! - `UniformPolicy`: picks uniformly among legal actions. Used to drive
//!   random games in tests.
//!
//! Both read the state through `RulesEngine` and never mutate it; the
//! session applies whatever they return.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::{Card, CardId, Rank};
use crate::core::config::DEFAULT_DRAW_PROBABILITY;
use crate::core::{Action, GameRng, GameState, Player};
use crate::rules::RulesEngine;

/// Above this total the computer draws unless it holds a safe card.
pub const SAFE_TOTAL: i32 = 85;

/// Below this hand size the computer always draws.
pub const MIN_HAND_BEFORE_DRAW: usize = 3;

/// Total the risk curve centers on.
pub const RISK_PIVOT: i32 = 90;

/// Risk of ending a play on `total`. Lower is better.
///
/// `(t-90)*10` from 90 up, `(t-80)*5` from 80 to 89, `90-t` below 80.
#[must_use]
pub fn risk(total: i32) -> i32 {
    if total >= RISK_PIVOT {
        (total - RISK_PIVOT) * 10
    } else if total >= 80 {
        (total - 80) * 5
    } else {
        RISK_PIVOT - total
    }
}

/// Risk of playing `card` now, adjusted for its turn-control value.
///
/// The base is the risk of the current total, so every card starts equal
/// and only the rank adjustments separate them: a king is always risk 0;
/// J, 5 and 4 get 5, 4 and 3 knocked off. [`RiskHeuristic::best_card`]
/// breaks the remaining ties on the total each card would produce.
#[must_use]
pub fn card_risk(state: &GameState, card: &Card) -> i32 {
    let base = risk(state.running_total);
    match card.rank {
        Rank::King => 0,
        Rank::Jack => base - 5,
        Rank::Five => base - 4,
        Rank::Four => base - 3,
        _ => base,
    }
}

/// Policy that chooses an action for a computer-controlled player.
pub trait ComputerPolicy<E: RulesEngine> {
    /// Action for `player` in `state`. Randomness comes only from `rng`.
    fn decide(&self, engine: &E, player: &Player, state: &GameState, rng: &mut GameRng) -> Action;
}

/// The risk-scoring computer opponent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskHeuristic {
    /// Chance of drawing anyway when the total is comfortable.
    pub draw_probability: f64,
    pub safe_total: i32,
    pub min_hand: usize,
}

impl Default for RiskHeuristic {
    fn default() -> Self {
        Self {
            draw_probability: DEFAULT_DRAW_PROBABILITY,
            safe_total: SAFE_TOTAL,
            min_hand: MIN_HAND_BEFORE_DRAW,
        }
    }
}

impl RiskHeuristic {
    #[must_use]
    pub fn with_draw_probability(mut self, probability: f64) -> Self {
        self.draw_probability = probability;
        self
    }

    /// Whether some card in `player`'s hand keeps the total at or under
    /// `safe_total`.
    ///
    /// A card counts as safe when its effect applied to the current total,
    /// as [`RulesEngine::resolve_total`] resolves it, lands at or under
    /// `safe_total`. Whether the card matches the center card is ignored.
    /// The effect is not applied to a fresh total of 0: from 0 nearly every
    /// card is safe.
    pub fn has_safe_card<E: RulesEngine>(&self, engine: &E, player: &Player, state: &GameState) -> bool {
        player
            .hand
            .iter()
            .any(|card| engine.resolve_total(state, card) <= self.safe_total)
    }

    /// Draw-preference policy. Consumes one random draw only when the
    /// total is at or under `safe_total` and the hand is big enough.
    pub fn prefers_draw<E: RulesEngine>(
        &self,
        engine: &E,
        player: &Player,
        state: &GameState,
        rng: &mut GameRng,
    ) -> bool {
        if player.hand_size() < self.min_hand {
            return true;
        }
        if state.running_total > self.safe_total {
            return !self.has_safe_card(engine, player, state);
        }
        rng.gen_bool(self.draw_probability)
    }

    /// Playable card with the lowest adjusted risk. Ties go to the card
    /// whose resulting total is closest to 90, then to hand order.
    pub fn best_card<E: RulesEngine>(&self, engine: &E, player: &Player, state: &GameState) -> Option<CardId> {
        player
            .hand
            .iter()
            .filter(|card| engine.can_play(card, state.center_card.as_ref()))
            .map(|card| {
                let adjusted = card_risk(state, card);
                let distance = (engine.resolve_total(state, card) - RISK_PIVOT).abs();
                trace!(player = %player.id, card = %card, adjusted, distance, "card scored");
                (adjusted, distance, card.id)
            })
            // min_by_key keeps the first of equal keys.
            .min_by_key(|&(adjusted, distance, _)| (adjusted, distance))
            .map(|(_, _, id)| id)
    }
}

impl<E: RulesEngine> ComputerPolicy<E> for RiskHeuristic {
    fn decide(&self, engine: &E, player: &Player, state: &GameState, rng: &mut GameRng) -> Action {
        let can_draw = engine.check_draw(state, player.id).is_ok();

        if can_draw && self.prefers_draw(engine, player, state, rng) {
            return Action::Draw;
        }

        match self.best_card(engine, player, state) {
            Some(card) => Action::play(card),
            None if can_draw => Action::Draw,
            None => Action::Pass,
        }
    }
}

/// Uniformly random legal action.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl<E: RulesEngine> ComputerPolicy<E> for UniformPolicy {
    fn decide(&self, engine: &E, player: &Player, state: &GameState, rng: &mut GameRng) -> Action {
        let actions = engine.legal_actions(state, player.id);
        if actions.is_empty() {
            return Action::Pass;
        }
        actions[rng.gen_range_usize(0..actions.len())]
    }
}

/// Decide with the default `RiskHeuristic`.
pub fn decide_computer_action<E: RulesEngine>(
    engine: &E,
    player: &Player,
    state: &GameState,
    rng: &mut GameRng,
) -> Action {
    RiskHeuristic::default().decide(engine, player, state, rng)
}
