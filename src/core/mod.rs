//! Core types: players, plays, turn state, RNG, configuration.
//!
//! These are the building blocks the rules and the engine share. Nothing in
//! here decides legality; that lives in `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{Action, ActionRecord, Outcome, Play, MAX_GROUP};
pub use state::{Placement, Transition, TurnState};
