//! President rules: which plays are legal and what they do.
//!
//! `ActionEvaluator` is side-effect free. It reads a `TurnState` and
//! returns a verdict and an `Outcome`; the engine is the only place that
//! commits anything.

pub mod evaluator;

pub use evaluator::ActionEvaluator;
