//! Game engine: the turn loop and its collaborators.
//!
//! - `GameEngine`: owns `TurnState` and every `Hand`, drives turns
//! - `DecisionPolicy`: picks one action from the legal union
//! - `Observer`: receives `GameEvent`s for narration or recording

pub mod game;
pub mod observer;
pub mod policy;

pub use game::{EnginePhase, GameEngine, Standings, Step};
pub use observer::{ClearReason, EventLog, GameEvent, LogObserver, NullObserver, Observer};
pub use policy::{DecisionPolicy, FirstAvailable, LowestFirst, UniformRandom};
