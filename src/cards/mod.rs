//! Cards, deck construction and dealing.
//!
//! ## Key Types
//!
//! - `Card`: suit, rank, ruleset effect value and a unique `CardId`
//! - `build_deck` / `shuffle`: the 52-card deck for a ruleset
//! - `deal` / `seed_center_card`: opening hands, draw pile and center card

pub mod card;
pub mod deal;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deal::{deal, seed_center_card, HAND_SIZE};
pub use deck::{build_deck, shuffle, DECK_SIZE};
