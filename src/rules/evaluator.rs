//! Legality and outcome of candidate plays.
//!
//! Rules, first match wins:
//!
//! 1. A pass is legal for the active player while the pile is live.
//! 2. A play that brings the pile to four cards of its rank is legal for any
//!    remaining player, in turn or not (out-of-turn clear).
//! 3. Anything else needs the player to be on turn.
//! 4. On an empty pile any grouping leads.
//! 5. Otherwise the grouping must match the pile's size...
//! 6. ...and be of equal or higher rank.

use crate::cards::Hand;
use crate::core::{Action, Outcome, Play, PlayerId, TurnState, MAX_GROUP};

/// Pure rule checks over a `TurnState`; holds no state of its own.
pub struct ActionEvaluator;

impl ActionEvaluator {
    /// True if `play` together with the pile makes four of one rank.
    #[must_use]
    pub fn completes_rank(pile: &Play, play: &Play) -> bool {
        !pile.is_pass()
            && !play.is_pass()
            && pile.len() + play.len() == MAX_GROUP
            && pile.rank() == play.rank()
    }

    /// Check whether `player` may make `play` right now.
    ///
    /// Does not look at the player's hand; pair with `legal_plays` or
    /// `Hand::contains_play` for that.
    #[must_use]
    pub fn is_legal(state: &TurnState, player: PlayerId, play: &Play) -> bool {
        if state.is_terminal() || !state.is_remaining(player) {
            return false;
        }
        let pile = state.pile();
        let on_turn = state.is_active(player);

        if play.is_pass() {
            return on_turn && !pile.is_pass();
        }
        if Self::completes_rank(pile, play) {
            return true;
        }
        if !on_turn {
            return false;
        }
        match (pile.rank(), play.rank()) {
            (None, _) => true,
            (Some(pile_rank), Some(rank)) => play.len() == pile.len() && rank >= pile_rank,
            (Some(_), None) => false,
        }
    }

    /// Outcome of playing `play` onto `pile`, assuming it was legal.
    #[must_use]
    pub fn outcome(pile: &Play, play: &Play) -> Outcome {
        if play.is_pass() {
            Outcome::Pass
        } else if play.len() == MAX_GROUP || Self::completes_rank(pile, play) {
            Outcome::Clear
        } else if !pile.is_pass() && pile.rank() == play.rank() {
            Outcome::Skip
        } else {
            Outcome::Normal
        }
    }

    /// Legality and outcome in one call; `None` when illegal.
    #[must_use]
    pub fn evaluate(state: &TurnState, player: PlayerId, play: &Play) -> Option<Outcome> {
        Self::is_legal(state, player, play).then(|| Self::outcome(state.pile(), play))
    }

    /// Groupings from `hand` that `player` may make now, in enumeration order.
    #[must_use]
    pub fn legal_plays(state: &TurnState, player: PlayerId, hand: &Hand) -> Vec<Play> {
        hand.possible_moves()
            .into_iter()
            .filter(|play| Self::is_legal(state, player, play))
            .collect()
    }

    /// Legal actions for every remaining player, in seat order.
    pub fn legal_actions<'a>(
        state: &TurnState,
        hands: impl Fn(PlayerId) -> Option<&'a Hand>,
    ) -> Vec<Action> {
        let mut actions = Vec::new();
        for &player in state.remaining_players() {
            if let Some(hand) = hands(player) {
                actions.extend(
                    Self::legal_plays(state, player, hand)
                        .into_iter()
                        .map(|play| Action::new(player, play)),
                );
            }
        }
        actions
    }
}
