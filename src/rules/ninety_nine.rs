//! The configurable 99 engine.

use serde::{Deserialize, Serialize};

use crate::cards::HAND_SIZE;
use crate::core::SessionConfig;

use super::engine::RulesEngine;
use super::ruleset::{BustWinnerPolicy, FourCardMode, RuleSet};

/// 99 under one ruleset and its policy choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NinetyNine {
    ruleset: RuleSet,
    hand_size: usize,
    four_card: FourCardMode,
    bust_winner: BustWinnerPolicy,
}

impl Default for NinetyNine {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl NinetyNine {
    #[must_use]
    pub fn new(ruleset: RuleSet) -> Self {
        Self {
            ruleset,
            hand_size: HAND_SIZE,
            four_card: FourCardMode::default(),
            bust_winner: BustWinnerPolicy::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            ruleset: config.ruleset,
            hand_size: config.hand_size,
            four_card: config.four_card,
            bust_winner: config.bust_winner,
        }
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_four_card(mut self, mode: FourCardMode) -> Self {
        self.four_card = mode;
        self
    }

    #[must_use]
    pub fn with_bust_winner(mut self, policy: BustWinnerPolicy) -> Self {
        self.bust_winner = policy;
        self
    }
}

impl RulesEngine for NinetyNine {
    fn ruleset(&self) -> RuleSet {
        self.ruleset
    }

    fn hand_size(&self) -> usize {
        self.hand_size
    }

    fn four_card(&self) -> FourCardMode {
        self.four_card
    }

    fn bust_winner(&self) -> BustWinnerPolicy {
        self.bust_winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, GameStatus, PlayerId};

    #[test]
    fn test_new_game_full_specials() {
        let config = SessionConfig::default().with_player_count(4);
        let engine = NinetyNine::from_config(&config);
        let state = engine.new_game(&config, &mut GameRng::new(42));

        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.player_count(), 4);
        assert!(state.players.iter().all(|p| p.hand_size() == 5));
        assert_eq!(state.draw_pile.len(), 52 - 20 - 1);
        assert_eq!(state.current_player_id(), Some(PlayerId::new(0)));
        assert!(!state.players[0].is_computer);
        assert!(state.players[3].is_computer);

        let center = state.center_card.unwrap();
        assert!(!RuleSet::FullSpecials.is_special(center.rank));
        assert!(state.check_integrity().is_ok());
    }

    #[test]
    fn test_new_game_without_seed_card() {
        let config = SessionConfig::default().with_ruleset(RuleSet::Simple);
        let engine = NinetyNine::from_config(&config);
        let state = engine.new_game(&config, &mut GameRng::new(1));

        assert!(state.center_card.is_none());
        assert_eq!(state.draw_pile.len(), 42);
        assert!(state.check_integrity().is_ok());
    }

    #[test]
    fn test_same_seed_same_deal() {
        let config = SessionConfig::default().with_player_count(3);
        let engine = NinetyNine::from_config(&config);

        let a = engine.new_game(&config, &mut GameRng::new(5));
        let b = engine.new_game(&config, &mut GameRng::new(5));
        let c = engine.new_game(&config, &mut GameRng::new(6));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_builder() {
        let engine = NinetyNine::new(RuleSet::ScoreRace)
            .with_hand_size(4)
            .with_four_card(FourCardMode::Reverse)
            .with_bust_winner(BustWinnerPolicy::FewestCards);

        assert_eq!(engine.ruleset(), RuleSet::ScoreRace);
        assert_eq!(engine.hand_size(), 4);
        assert_eq!(engine.four_card(), FourCardMode::Reverse);
        assert_eq!(engine.bust_winner(), BustWinnerPolicy::FewestCards);
    }
}
