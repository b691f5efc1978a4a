//! Turn bookkeeping shared by the transitions: advancing the current seat,
//! topping hands up, recording history and ending the game.

use tracing::info;

use crate::core::{Action, ActionRecord, EndReason, GameState, GameStatus, PlayerId};

use super::ruleset::{BustWinnerPolicy, TurnEffect};

/// Move the turn on from seat `from` according to `effect`.
///
/// The round counter increments every time play enters seat 0.
pub(crate) fn advance(state: &mut GameState, from: usize, effect: TurnEffect) {
    let steps = match effect {
        TurnEffect::Repeat => 0,
        TurnEffect::Next => 1,
        TurnEffect::Skip => 2,
        TurnEffect::Reverse => {
            state.direction = state.direction.reversed();
            1
        }
    };

    for step in 1..=steps {
        if state.seat_after(from, step) == 0 {
            state.round += 1;
        }
    }
    state.current_player_index = state.seat_after(from, steps);
}

/// Refill seat `seat` from the front of the pile until it holds `hand_size`
/// cards or the pile runs out.
pub(crate) fn replenish(state: &mut GameState, seat: usize, hand_size: usize) {
    while state.players[seat].hand.len() < hand_size {
        match state.draw_pile.pop_front() {
            Some(card) => state.players[seat].hand.push_back(card),
            None => break,
        }
    }
}

pub(crate) fn record(state: &mut GameState, player: PlayerId, action: Action) {
    let sequence = state.history.len() as u32;
    let record = ActionRecord::new(player, action, state.round, sequence, state.running_total);
    state.history.push_back(record);
}

pub(crate) fn finish(state: &mut GameState, winner: PlayerId, reason: EndReason) {
    state.status = GameStatus::Ended;
    state.winner = Some(winner);
    state.end_reason = Some(reason);
    info!(%winner, ?reason, total = state.running_total, round = state.round, "game over");
}

/// First seat, in seat order, holding no cards.
pub(crate) fn empty_hand(state: &GameState) -> Option<PlayerId> {
    state
        .players
        .iter()
        .find(|p| p.hand.is_empty())
        .map(|p| p.id)
}

/// Other seats in turn order after `actor`, following the current direction.
fn others_in_turn_order(state: &GameState, actor: usize) -> impl Iterator<Item = usize> + '_ {
    (1..state.player_count()).map(move |step| state.seat_after(actor, step))
}

/// Winner when the player at `actor` busts.
pub(crate) fn bust_winner(state: &GameState, actor: usize, policy: BustWinnerPolicy) -> PlayerId {
    let seat = match policy {
        BustWinnerPolicy::NextInTurn => others_in_turn_order(state, actor).next(),
        BustWinnerPolicy::FirstInSeatOrder => (0..state.player_count()).find(|&seat| seat != actor),
        BustWinnerPolicy::FewestCards => fewest_cards(state, others_in_turn_order(state, actor)),
    };
    seat.map_or(PlayerId::new(actor as u8), |seat| state.players[seat].id)
}

/// Winner of a blocked game: fewest cards, ties to the earliest seat.
pub(crate) fn blocked_winner(state: &GameState) -> PlayerId {
    fewest_cards(state, 0..state.player_count())
        .map_or(PlayerId::new(0), |seat| state.players[seat].id)
}

fn fewest_cards(state: &GameState, seats: impl Iterator<Item = usize>) -> Option<usize> {
    // min_by_key keeps the first of equal elements.
    seats.min_by_key(|&seat| state.players[seat].hand.len())
}
