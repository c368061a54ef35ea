//! # rust-president
//!
//! Turn-resolution engine for the card game President.
//!
//! Players shed cards as singles or same-rank groups of equal or higher rank
//! than the pile. Matching the pile's rank skips the next seat, bringing a
//! rank to four cards clears the table (out of turn, if need be), and a full
//! round of passes hands the lead back. The first player out of cards is
//! President; the last one holding cards finishes last.
//!
//! ## Modules
//!
//! - `cards`: cards, the 52-card deck, hands and grouping enumeration
//! - `core`: players, plays, turn state, RNG, configuration
//! - `rules`: the pure legality/outcome evaluator
//! - `engine`: the turn loop, decision policies and observers
//!
//! ## Example
//!
//! ```
//! use rust_president::{FirstAvailable, GameConfig, GameEngine, NullObserver};
//!
//! let config = GameConfig::new(4).with_seed(7);
//! let mut engine = GameEngine::new(&config, FirstAvailable, NullObserver).unwrap();
//! let standings = engine.run().unwrap();
//! assert_eq!(standings.finish_order.len(), 4);
//! ```

pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, Hand, Rank, Suit};

pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, Outcome, Placement, Play, PlayerId, PlayerMap,
    Transition, TurnState,
};

pub use crate::engine::{
    ClearReason, DecisionPolicy, EnginePhase, EventLog, FirstAvailable, GameEngine, GameEvent,
    LogObserver, LowestFirst, NullObserver, Observer, Standings, Step, UniformRandom,
};

pub use crate::error::{PresidentError, Result};

pub use crate::rules::ActionEvaluator;
