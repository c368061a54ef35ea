//! Cards, the deck and player hands.
//!
//! ## Key Types
//!
//! - `Card`: immutable rank + suit, ordered by rank value
//! - `Deck`: the 52-card source, shuffled with `GameRng`, dealt round-robin
//! - `Hand`: one player's cards and the groupings they can offer

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use hand::Hand;
