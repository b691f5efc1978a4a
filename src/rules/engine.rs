//! Rules engine trait.
//!
//! An engine supplies the rule primitives (ruleset, hand size, the 4-card
//! mode and the bust policy); the trait turns them into the game's
//! transitions:
//! - `new_game`: shuffle, deal and start a game
//! - `can_play` / `next_total` / `turn_effect`: read-only rule questions
//! - `apply_play` / `apply_draw` / `apply_pass`: state transitions
//! - `is_terminal`: outcome of an ended game
//! - `legal_actions`: everything the current player may do
//!
//! Transitions take a snapshot and return a new one. An invalid request
//! (wrong player, card not held, game over, ...) returns an unchanged copy
//! of the input; `check_play`, `check_draw` and `check_pass` report why.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::cards::{build_deck, deal, seed_center_card, shuffle, Card, CardId};
use crate::core::{Action, EndReason, GameRng, GameState, Player, PlayerId, SessionConfig};

use super::ruleset::{clamp_total, BustWinnerPolicy, FourCardMode, RuleSet, TurnEffect, MAX_TOTAL};
use super::turn;

/// Outcome of an ended game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: EndReason,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Why a transition was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayRejection {
    #[error("the game is not in progress")]
    NotInProgress,
    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),
    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: CardId },
    #[error("{0} cannot be played on the center card")]
    Unplayable(CardId),
    #[error("the draw pile is empty")]
    EmptyDrawPile,
    #[error("{0} can still play or draw")]
    PassNotAllowed(PlayerId),
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - Only the four configuration methods are required
/// - Override `can_play`, `next_total` or `turn_effect` to vary a rule
///   without touching the transitions
/// - Every method is deterministic given its inputs
pub trait RulesEngine {
    fn ruleset(&self) -> RuleSet;

    /// Target hand size for dealing and replenishment.
    fn hand_size(&self) -> usize;

    fn four_card(&self) -> FourCardMode;

    fn bust_winner(&self) -> BustWinnerPolicy;

    // === Setup ===

    /// Shuffle a fresh deck, deal, turn up the center card if the ruleset
    /// wants one, and start the game with seat 0 to act.
    ///
    /// Names and computer seats come from `config`; `rng` is the shuffle
    /// stream.
    fn new_game(&self, config: &SessionConfig, rng: &mut GameRng) -> GameState {
        let ruleset = self.ruleset();
        let deck = shuffle(build_deck(ruleset), rng);
        let (players, rest) = deal(&deck, config.player_count, self.hand_size());
        let (center, pile) = seed_center_card(rest, ruleset);

        let players = players
            .into_iter()
            .map(|p| {
                let name = config.player_name(p.id);
                let computer = config.is_computer(p.id.index());
                p.with_name(name).computer(computer)
            })
            .collect();

        debug!(
            ?ruleset,
            players = config.player_count,
            pile = pile.len(),
            center = ?center.map(|c| c.to_string()),
            "new game dealt"
        );
        GameState::new(players, pile, center).start()
    }

    // === Rule questions ===

    fn can_play(&self, card: &Card, center: Option<&Card>) -> bool {
        self.ruleset().can_play(card, center)
    }

    fn next_total(&self, current_total: i32, card: &Card, has_center: bool) -> i32 {
        self.ruleset().next_total(current_total, card, has_center)
    }

    fn turn_effect(&self, card: &Card) -> TurnEffect {
        self.ruleset().turn_effect(card.rank, self.four_card())
    }

    /// Total that playing `card` in `state` would produce.
    fn resolve_total(&self, state: &GameState, card: &Card) -> i32 {
        self.next_total(state.running_total, card, state.center_card.is_some())
    }

    // === Validation ===

    /// The acting player, if the game is running and it is their turn.
    fn check_turn<'s>(&self, state: &'s GameState, player: PlayerId) -> Result<&'s Player, PlayRejection> {
        if !state.is_in_progress() {
            return Err(PlayRejection::NotInProgress);
        }
        let seated = state.player(player).ok_or(PlayRejection::UnknownPlayer(player))?;
        if state.current_player_index != player.index() {
            return Err(PlayRejection::NotYourTurn(player));
        }
        Ok(seated)
    }

    fn check_play(&self, state: &GameState, player: PlayerId, card: CardId) -> Result<(), PlayRejection> {
        let seated = self.check_turn(state, player)?;
        let (_, held) = seated
            .find_card(card)
            .ok_or(PlayRejection::CardNotInHand { player, card })?;
        if !self.can_play(held, state.center_card.as_ref()) {
            return Err(PlayRejection::Unplayable(card));
        }
        Ok(())
    }

    fn check_draw(&self, state: &GameState, player: PlayerId) -> Result<(), PlayRejection> {
        self.check_turn(state, player)?;
        if state.draw_pile.is_empty() {
            return Err(PlayRejection::EmptyDrawPile);
        }
        Ok(())
    }

    /// Passing is only allowed with no playable card and no possible draw.
    fn check_pass(&self, state: &GameState, player: PlayerId) -> Result<(), PlayRejection> {
        let seated = self.check_turn(state, player)?;
        let can_act = self.check_draw(state, player).is_ok()
            || seated
                .hand
                .iter()
                .any(|card| self.can_play(card, state.center_card.as_ref()));
        if can_act {
            return Err(PlayRejection::PassNotAllowed(player));
        }
        Ok(())
    }

    // === Transitions ===

    /// Play `card` from `player`'s hand, setting the total to `resolved_total`.
    ///
    /// Callers normally pass [`RulesEngine::resolve_total`]. Under a bust
    /// ruleset a total above 99 ends the game with the actor losing; the
    /// stored total is clamped either way.
    fn apply_play(&self, state: &GameState, player: PlayerId, card: CardId, resolved_total: i32) -> GameState {
        if let Err(rejection) = self.check_play(state, player, card) {
            debug!(%player, %card, %rejection, "play ignored");
            return state.clone();
        }

        let actor = player.index();
        let mut next = state.clone();
        let Some((pos, _)) = next.players[actor].find_card(card) else {
            return state.clone();
        };
        let played = next.players[actor].hand.remove(pos);

        if let Some(covered) = next.center_card.replace(played) {
            next.discard_pile.push_back(covered);
        }
        next.running_total = clamp_total(resolved_total);
        next.consecutive_passes = 0;

        turn::advance(&mut next, actor, self.turn_effect(&played));
        turn::replenish(&mut next, actor, self.hand_size());
        turn::record(&mut next, player, Action::play(card));

        debug!(
            %player,
            card = %played,
            from = state.running_total,
            to = next.running_total,
            next = next.current_player_index,
            "card played"
        );

        if self.ruleset().busts() && resolved_total > MAX_TOTAL {
            let winner = turn::bust_winner(&next, actor, self.bust_winner());
            turn::finish(&mut next, winner, EndReason::Bust { actor: player });
        } else if let Some(winner) = turn::empty_hand(&next) {
            turn::finish(&mut next, winner, EndReason::EmptyHand);
        }
        next
    }

    /// Move the front card of the pile to the back of `player`'s hand and
    /// pass the turn on.
    fn apply_draw(&self, state: &GameState, player: PlayerId) -> GameState {
        if let Err(rejection) = self.check_draw(state, player) {
            debug!(%player, %rejection, "draw ignored");
            return state.clone();
        }

        let actor = player.index();
        let mut next = state.clone();
        if let Some(card) = next.draw_pile.pop_front() {
            next.players[actor].hand.push_back(card);
        }
        next.consecutive_passes = 0;

        turn::advance(&mut next, actor, TurnEffect::Next);
        turn::record(&mut next, player, Action::Draw);
        debug!(%player, pile = next.draw_pile.len(), next = next.current_player_index, "card drawn");

        if let Some(winner) = turn::empty_hand(&next) {
            turn::finish(&mut next, winner, EndReason::EmptyHand);
        }
        next
    }

    /// Give up the turn. A full round of consecutive passes blocks the game
    /// and the player holding the fewest cards wins.
    fn apply_pass(&self, state: &GameState, player: PlayerId) -> GameState {
        if let Err(rejection) = self.check_pass(state, player) {
            debug!(%player, %rejection, "pass ignored");
            return state.clone();
        }

        let mut next = state.clone();
        next.consecutive_passes += 1;
        turn::advance(&mut next, player.index(), TurnEffect::Next);
        turn::record(&mut next, player, Action::Pass);
        debug!(%player, passes = next.consecutive_passes, "turn passed");

        if next.consecutive_passes as usize >= next.player_count() {
            let winner = turn::blocked_winner(&next);
            turn::finish(&mut next, winner, EndReason::Blocked);
        }
        next
    }

    /// Apply any action; plays resolve their total with `resolve_total`.
    fn apply_action(&self, state: &GameState, player: PlayerId, action: &Action) -> GameState {
        match *action {
            Action::Play { card } => {
                let total = state
                    .player(player)
                    .and_then(|p| p.find_card(card))
                    .map_or(state.running_total, |(_, held)| self.resolve_total(state, held));
                self.apply_play(state, player, card, total)
            }
            Action::Draw => self.apply_draw(state, player),
            Action::Pass => self.apply_pass(state, player),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if !state.is_over() {
            return None;
        }
        let winner = state.winner?;
        let reason = state.end_reason?;
        Some(GameResult { winner, reason })
    }

    // === Convenience Methods ===

    /// Every action `player` may take: a draw, each playable card, or a
    /// lone pass when neither exists. Empty when it is not their turn.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> SmallVec<[Action; 8]> {
        let mut actions = SmallVec::new();
        let Ok(seated) = self.check_turn(state, player) else {
            return actions;
        };

        if self.check_draw(state, player).is_ok() {
            actions.push(Action::Draw);
        }
        actions.extend(
            seated
                .hand
                .iter()
                .filter(|card| self.can_play(card, state.center_card.as_ref()))
                .map(|card| Action::play(card.id)),
        );
        if actions.is_empty() {
            actions.push(Action::Pass);
        }
        actions
    }
}
