//! The turn loop.
//!
//! Each `step` does exactly one of two things:
//!
//! - if the turn has come back to the pass marker, clear the table and let
//!   that player lead (no actions are collected), or
//! - collect the legal actions of every remaining player, ask the policy for
//!   one, and commit it.
//!
//! `run` steps until a single player is left.

use crate::cards::{Deck, Hand};
use crate::core::{Action, GameConfig, GameRng, Outcome, PlayerId, PlayerMap, Transition, TurnState};
use crate::error::{PresidentError, Result};
use crate::rules::ActionEvaluator;

use super::observer::{ClearReason, GameEvent, NullObserver, Observer};
use super::policy::DecisionPolicy;

/// Where the engine is in its loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnginePhase {
    AwaitingAction,
    /// Set only while `commit` runs; callers see one of the other two.
    Resolving,
    Terminal,
}

/// What one `step` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Everyone passed back to `leader`; the table was cleared.
    PassAroundCleared { leader: PlayerId },
    /// An action was committed.
    Acted { action: Action, transition: Transition },
}

/// Final placement of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standings {
    /// First finisher first; the last entry never emptied their hand.
    pub finish_order: Vec<PlayerId>,
}

impl Standings {
    /// First player out.
    #[must_use]
    pub fn president(&self) -> Option<PlayerId> {
        self.finish_order.first().copied()
    }

    /// Player left holding cards.
    #[must_use]
    pub fn scum(&self) -> Option<PlayerId> {
        self.finish_order.last().copied()
    }

    /// 1-based finishing place.
    #[must_use]
    pub fn place_of(&self, player: PlayerId) -> Option<usize> {
        self.finish_order.iter().position(|&p| p == player).map(|i| i + 1)
    }
}

/// Owns the state and hands of one game and drives it to completion.
pub struct GameEngine<P, O = NullObserver> {
    state: TurnState,
    hands: PlayerMap<Hand>,
    policy: P,
    observer: O,
    phase: EnginePhase,
}

impl<P: DecisionPolicy, O: Observer> GameEngine<P, O> {
    /// Shuffle a deck from the config seed and deal it out.
    pub fn new(config: &GameConfig, policy: P, observer: O) -> Result<Self> {
        config.validate()?;
        let mut rng = GameRng::new(config.seed).for_context("deck");
        Self::with_deck(config, Deck::shuffled(&mut rng), policy, observer)
    }

    /// Deal a caller-supplied deck round-robin.
    pub fn with_deck(config: &GameConfig, deck: Deck, policy: P, observer: O) -> Result<Self> {
        config.validate()?;
        let hands = deck.deal_round_robin(config.player_count)?;
        Self::with_hands(config, hands, policy, observer)
    }

    /// Start from hands that were already dealt.
    pub fn with_hands(
        config: &GameConfig,
        hands: PlayerMap<Hand>,
        policy: P,
        mut observer: O,
    ) -> Result<Self> {
        let state = TurnState::from_config(config)?;
        if hands.player_count() != config.player_count {
            return Err(PresidentError::InvalidConfig(format!(
                "{} hands for {} players",
                hands.player_count(),
                config.player_count
            )));
        }
        if let Some((player, _)) = hands.iter().find(|(_, hand)| hand.is_empty()) {
            return Err(PresidentError::InvalidConfig(format!("{} was dealt no cards", player)));
        }

        let hand_sizes = hands.iter().map(|(_, hand)| hand.len()).collect();
        observer.on_event(&GameEvent::Dealt { hand_sizes });
        log::debug!("game started, {} to lead", state.active_player());

        Ok(Self {
            state,
            hands,
            policy,
            observer,
            phase: EnginePhase::AwaitingAction,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.hands.get(player)
    }

    #[must_use]
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Final placement, once the game is over.
    #[must_use]
    pub fn standings(&self) -> Option<Standings> {
        self.state.is_terminal().then(|| Standings {
            finish_order: self.state.finish_order().to_vec(),
        })
    }

    /// Union of legal actions over all remaining players, in seat order.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        ActionEvaluator::legal_actions(&self.state, |player| self.hands.get(player))
    }

    // === Loop ===

    /// Play until one player remains.
    pub fn run(&mut self) -> Result<Standings> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        self.standings().ok_or(PresidentError::GameOver)
    }

    /// Advance the game by one iteration.
    pub fn step(&mut self) -> Result<Step> {
        if self.state.is_terminal() {
            return Err(PresidentError::GameOver);
        }
        if let Some(leader) = self.resolve_pass_around() {
            return Ok(Step::PassAroundCleared { leader });
        }

        let actions = self.legal_actions();
        if actions.is_empty() {
            return Err(PresidentError::NoLegalActions {
                turn: self.state.turn(),
            });
        }

        let choice = self.policy.choose(&self.state, &actions);
        if !actions.contains(&choice) {
            return Err(PresidentError::InvalidPolicySelection {
                action: choice.to_string(),
                offered: actions.len(),
            });
        }
        self.commit(choice)
    }

    /// Commit an action chosen outside the policy.
    ///
    /// The action is judged against the table as `step` would leave it, so a
    /// pending pass-around clear counts as already done. It must also use
    /// cards the player holds. A rejected action changes nothing: the pending
    /// clear stays pending and observers hear nothing.
    pub fn apply(&mut self, action: Action) -> Result<Step> {
        if self.state.is_terminal() {
            return Err(PresidentError::GameOver);
        }
        if !self.state.is_remaining(action.player) {
            return Err(PresidentError::UnknownPlayer(action.player));
        }

        let held = self
            .hands
            .get(action.player)
            .is_some_and(|hand| hand.contains_play(&action.play));
        let legal = if self.state.pass_around_complete() {
            let mut cleared = self.state.clone();
            cleared.clear_pass_around();
            ActionEvaluator::is_legal(&cleared, action.player, &action.play)
        } else {
            ActionEvaluator::is_legal(&self.state, action.player, &action.play)
        };
        if !held || !legal {
            return Err(PresidentError::IllegalAction {
                player: action.player,
                play: action.play.to_string(),
            });
        }

        self.resolve_pass_around();
        self.commit(action)
    }

    fn resolve_pass_around(&mut self) -> Option<PlayerId> {
        if !self.state.pass_around_complete() {
            return None;
        }
        let leader = self.state.clear_pass_around();
        log::debug!("turn {}: everyone passed, {} leads", self.state.turn(), leader);
        self.observer.on_event(&GameEvent::BoardCleared {
            reason: ClearReason::AllPassed,
            leader,
        });
        Some(leader)
    }

    fn commit(&mut self, action: Action) -> Result<Step> {
        self.phase = EnginePhase::Resolving;

        let outcome = ActionEvaluator::outcome(self.state.pile(), &action.play);
        let hand = self
            .hands
            .get_mut(action.player)
            .ok_or(PresidentError::UnknownPlayer(action.player))?;
        hand.remove_play(&action.play)?;
        let emptied = hand.is_empty();

        let transition = self.state.apply(action.player, &action.play, outcome, emptied)?;
        log::debug!(
            "turn {}: {} ({}) -> {} to act",
            self.state.turn(),
            action,
            outcome,
            transition.next_player
        );

        if let Some(record) = self.state.history().last() {
            self.observer.on_event(&GameEvent::ActionTaken(record.clone()));
        }
        if outcome == Outcome::Clear && !transition.game_over {
            self.observer.on_event(&GameEvent::BoardCleared {
                reason: ClearReason::FourOfAKind,
                leader: transition.next_player,
            });
        }
        if let Some(placement) = transition.finished {
            self.observer.on_event(&GameEvent::PlayerFinished(placement));
        }

        self.phase = if transition.game_over {
            self.observer.on_event(&GameEvent::GameOver {
                finish_order: self.state.finish_order().to_vec(),
            });
            EnginePhase::Terminal
        } else {
            EnginePhase::AwaitingAction
        };

        Ok(Step::Acted { action, transition })
    }
}
