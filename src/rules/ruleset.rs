//! The three observed rulesets of 99 and the per-card rules they imply.
//!
//! | Rank | `ScoreRace` | `FullSpecials` | `Simple` |
//! |---|---|---|---|
//! | A | 1 | 1 | 1 |
//! | 2-3, 6-8 | face | face | face |
//! | 4 | 4 | direction card, no score change | 4 |
//! | 5 | 5 | redirect, no score change | 5 |
//! | 9 | 99, same player again | 9 | 99, same player again |
//! | 10 | 10 | +10, or -10 if +10 passes 99 | 10 |
//! | J | 10 | skip next player, no score change | 11 |
//! | Q | 20 | +20, or -20 if +20 passes 99 | 12 |
//! | K | 99 | total becomes 99 | 13 |
//!
//! A session picks exactly one ruleset; nothing in the engine mixes them.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Score ceiling.
pub const MAX_TOTAL: i32 = 99;

/// Score floor.
pub const MIN_TOTAL: i32 = 0;

/// Clamp a total into `[MIN_TOTAL, MAX_TOTAL]`.
#[must_use]
pub fn clamp_total(total: i32) -> i32 {
    total.clamp(MIN_TOTAL, MAX_TOTAL)
}

/// Active ruleset, fixed at session start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// Ruleset A: cards add to a race towards 99, suit/rank matching.
    ScoreRace,
    /// Ruleset B: bust avoidance with every special card; any card playable.
    #[default]
    FullSpecials,
    /// Ruleset C: bust avoidance with plain values, suit/rank matching.
    Simple,
}

/// How play moves on after a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnEffect {
    /// Next player in the current direction.
    Next,
    /// Skip exactly one player.
    Skip,
    /// The same player acts again.
    Repeat,
    /// Flip the direction, then pass to the next player in the new direction.
    Reverse,
}

/// What a 4 does under `FullSpecials`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FourCardMode {
    /// The player who played the 4 acts again.
    #[default]
    RepeatTurn,
    /// True direction reversal.
    Reverse,
}

/// Who wins when the acting player busts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BustWinnerPolicy {
    /// The player after the actor in the current direction.
    #[default]
    NextInTurn,
    /// The first other player in seat order.
    FirstInSeatOrder,
    /// The other player holding the fewest cards; ties go to turn order.
    FewestCards,
}

impl RuleSet {
    /// Effect value stamped on a card of `rank` when the deck is built.
    #[must_use]
    pub fn effect_value(self, rank: Rank) -> i32 {
        match (self, rank) {
            (_, Rank::Ace) => 1,
            (RuleSet::ScoreRace, Rank::Nine) => MAX_TOTAL,
            (RuleSet::ScoreRace, Rank::Jack) => 10,
            (RuleSet::ScoreRace, Rank::Queen) => 20,
            (RuleSet::ScoreRace, Rank::King) => MAX_TOTAL,
            (RuleSet::FullSpecials, Rank::Four) => -1,
            (RuleSet::FullSpecials, Rank::Five) => 0,
            (RuleSet::FullSpecials, Rank::Jack) => 10,
            (RuleSet::FullSpecials, Rank::Queen) => 20,
            (RuleSet::FullSpecials, Rank::King) => MAX_TOTAL,
            (RuleSet::Simple, Rank::Nine) => MAX_TOTAL,
            (_, rank) => rank.pips(),
        }
    }

    /// Whether this ruleset restricts plays to suit or rank matches.
    #[must_use]
    pub fn requires_match(self) -> bool {
        !matches!(self, RuleSet::FullSpecials)
    }

    /// Whether a card can be played on top of `center`.
    #[must_use]
    pub fn can_play(self, card: &Card, center: Option<&Card>) -> bool {
        if !self.requires_match() {
            return true;
        }
        match center {
            None => true,
            Some(center) => {
                card.rank == Rank::Nine || card.suit == center.suit || card.rank == center.rank
            }
        }
    }

    /// Running total after `card` is played onto `current_total`.
    ///
    /// With no center card yet the card's effect value starts the total.
    /// The result is always clamped into `[0, 99]`.
    #[must_use]
    pub fn next_total(self, current_total: i32, card: &Card, has_center: bool) -> i32 {
        if !has_center {
            return clamp_total(card.effect_value);
        }

        let total = match self {
            RuleSet::ScoreRace | RuleSet::Simple => current_total + card.effect_value,
            RuleSet::FullSpecials => match card.rank {
                Rank::Four | Rank::Five | Rank::Jack => current_total,
                Rank::Ten => raise_or_lower(current_total, 10),
                Rank::Queen => raise_or_lower(current_total, 20),
                Rank::King => MAX_TOTAL,
                _ => current_total + card.effect_value,
            },
        };
        clamp_total(total)
    }

    /// Turn movement caused by playing a card of `rank`.
    #[must_use]
    pub fn turn_effect(self, rank: Rank, four: FourCardMode) -> TurnEffect {
        match self {
            RuleSet::ScoreRace | RuleSet::Simple => match rank {
                Rank::Nine => TurnEffect::Repeat,
                _ => TurnEffect::Next,
            },
            RuleSet::FullSpecials => match rank {
                Rank::Four => match four {
                    FourCardMode::RepeatTurn => TurnEffect::Repeat,
                    FourCardMode::Reverse => TurnEffect::Reverse,
                },
                Rank::Five | Rank::King => TurnEffect::Repeat,
                Rank::Jack => TurnEffect::Skip,
                _ => TurnEffect::Next,
            },
        }
    }

    /// Whether a resolved total above 99 ends the game as a bust.
    ///
    /// The score race clamps instead.
    #[must_use]
    pub fn busts(self) -> bool {
        !matches!(self, RuleSet::ScoreRace)
    }

    /// Whether a center card is turned up from the pile at setup.
    #[must_use]
    pub fn seeds_center_card(self) -> bool {
        matches!(self, RuleSet::FullSpecials)
    }

    /// Ranks that may not be turned up as the opening center card. Only
    /// rulesets that seed a center card have any.
    #[must_use]
    pub fn is_special(self, rank: Rank) -> bool {
        match self {
            RuleSet::FullSpecials => matches!(
                rank,
                Rank::Four | Rank::Five | Rank::Jack | Rank::Queen | Rank::King
            ),
            RuleSet::ScoreRace | RuleSet::Simple => false,
        }
    }
}

/// Prefer `+step`; fall back to `-step` only if the increase passes 99.
fn raise_or_lower(total: i32, step: i32) -> i32 {
    if total + step <= MAX_TOTAL {
        total + step
    } else {
        total - step
    }
}
