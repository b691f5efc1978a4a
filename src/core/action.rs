//! Player actions and the history record of applied transitions.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// What the current player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Take the front card of the draw pile.
    Draw,
    /// Play a card from hand.
    Play { card: CardId },
    /// Give up the turn. Only legal with no playable card and no draw.
    Pass,
}

impl Action {
    #[must_use]
    pub const fn play(card: CardId) -> Self {
        Action::Play { card }
    }

    /// Card played, if this is a play.
    #[must_use]
    pub const fn card(&self) -> Option<CardId> {
        match self {
            Action::Play { card } => Some(*card),
            Action::Draw | Action::Pass => None,
        }
    }
}

/// An applied action with its place in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: Action,
    /// Round in which the action was taken.
    pub round: u32,
    /// Position in the game's history, starting at 0.
    pub sequence: u32,
    /// Running total after the action.
    pub total_after: i32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32, total_after: i32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
            total_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_card() {
        assert_eq!(Action::play(CardId::new(4)).card(), Some(CardId::new(4)));
        assert_eq!(Action::Draw.card(), None);
        assert_eq!(Action::Pass.card(), None);
    }

    #[test]
    fn test_action_json_shape() {
        let json = serde_json::to_string(&Action::play(CardId::new(12))).unwrap();
        assert_eq!(json, r#"{"type":"play","card":12}"#);

        let draw: Action = serde_json::from_str(r#"{"type":"draw"}"#).unwrap();
        assert_eq!(draw, Action::Draw);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::new(1), Action::Draw, 2, 7, 54);
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
