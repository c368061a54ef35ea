//! Decision policies: how the engine picks one action from the legal union.
//!
//! The engine hands every policy the full union of legal actions across all
//! remaining players (out-of-turn clears included) and expects one of them
//! back. Returning anything else is a fatal `InvalidPolicySelection`.

use crate::core::{Action, GameRng, TurnState};

/// Chooses the action the engine commits this iteration.
pub trait DecisionPolicy {
    /// Pick one of `actions`. Never called with an empty slice.
    fn choose(&mut self, state: &TurnState, actions: &[Action]) -> Action;
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for Box<P> {
    fn choose(&mut self, state: &TurnState, actions: &[Action]) -> Action {
        (**self).choose(state, actions)
    }
}

// =============================================================================
// First available
// =============================================================================

/// Always takes the first offered action.
///
/// Because hands enumerate singles before the pass, this leads and answers
/// with the lowest legal single, and any out-of-turn clear held by an
/// earlier seat wins over the active player's move.
#[derive(Clone, Debug, Default)]
pub struct FirstAvailable;

impl DecisionPolicy for FirstAvailable {
    fn choose(&mut self, _state: &TurnState, actions: &[Action]) -> Action {
        actions[0].clone()
    }
}

// =============================================================================
// Uniform random
// =============================================================================

/// Picks uniformly among the offered actions.
#[derive(Clone, Debug)]
pub struct UniformRandom {
    rng: GameRng,
}

impl UniformRandom {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Random policy on the `"policy"` stream of a game seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed).for_context("policy"))
    }
}

impl DecisionPolicy for UniformRandom {
    fn choose(&mut self, _state: &TurnState, actions: &[Action]) -> Action {
        let idx = self.rng.gen_range_usize(0..actions.len());
        actions[idx].clone()
    }
}

// =============================================================================
// Lowest first
// =============================================================================

/// Sheds low cards: takes the lowest-ranked non-pass action, preferring the
/// larger group on ties, and passes only when nothing else is offered.
#[derive(Clone, Debug, Default)]
pub struct LowestFirst;

impl DecisionPolicy for LowestFirst {
    fn choose(&mut self, _state: &TurnState, actions: &[Action]) -> Action {
        actions
            .iter()
            .filter_map(|a| a.play.rank().map(|rank| (rank, a)))
            .min_by(|(ra, a), (rb, b)| ra.cmp(rb).then(b.play.len().cmp(&a.play.len())))
            .map(|(_, a)| a)
            .unwrap_or(&actions[0])
            .clone()
    }
}
