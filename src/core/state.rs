//! Turn state: whose turn it is, what is on the table, who is still playing.
//!
//! `TurnState` is the single authoritative record of a game in progress. It
//! only knows about turn order and the pile; cards in hand live in the
//! engine's `PlayerMap<Hand>`, and legality is decided by `ActionEvaluator`.
//!
//! ## Seats
//!
//! Players are referred to by stable `PlayerId`s. `remaining_players` keeps
//! the original seat order with finished seats removed; positions are looked
//! up in the current list and every advance wraps modulo its current length.
//!
//! ## Pass marker
//!
//! The pass marker is the player to whom the turn returning means that every
//! other remaining player passed in succession. It is normally the owner of
//! the pile. If the owner finished with that play the marker starts empty and
//! the first player to pass takes it, so the standing play still goes once
//! around the table before it is cleared.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, Outcome, Play};
use super::config::GameConfig;
use super::player::PlayerId;
use crate::error::{PresidentError, Result};

/// A seat that emptied its hand, with its 1-based finishing place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub player: PlayerId,
    pub place: usize,
}

/// Effect of one committed action on the turn order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub outcome: Outcome,
    /// Set when the acting player emptied their hand.
    pub finished: Option<Placement>,
    /// Player whose turn it is now.
    pub next_player: PlayerId,
    /// True once a single player remains.
    pub game_over: bool,
}

/// Authoritative state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Players still holding cards, in seat order.
    seats: Vec<PlayerId>,

    active: PlayerId,

    /// Last accepted non-pass play; empty when the table is clear.
    pile: Play,

    pass_marker: Option<PlayerId>,

    /// Append-only: first entry finished first.
    finish_order: Vec<PlayerId>,

    /// Every accepted action, oldest first. `im::Vector` keeps clones cheap.
    history: Vector<ActionRecord>,

    /// Number of committed actions.
    turn: u32,
}

impl TurnState {
    /// Create the state for a new game; `Player 0` leads.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            seats: PlayerId::all(player_count).collect(),
            active: PlayerId::new(0),
            pile: Play::pass(),
            pass_marker: None,
            finish_order: Vec::new(),
            history: Vector::new(),
            turn: 0,
        }
    }

    /// Create the state described by a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let mut state = Self::new(config.player_count);
        state.active = config.first_player;
        Ok(state)
    }

    // === Accessors ===

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.active == player
    }

    /// Players still in the game, in seat order.
    #[must_use]
    pub fn remaining_players(&self) -> &[PlayerId] {
        &self.seats
    }

    #[must_use]
    pub fn is_remaining(&self, player: PlayerId) -> bool {
        self.seats.contains(&player)
    }

    /// Position of a player in the current seat list.
    #[must_use]
    pub fn seat_position(&self, player: PlayerId) -> Option<usize> {
        self.seats.iter().position(|&p| p == player)
    }

    #[must_use]
    pub fn pile(&self) -> &Play {
        &self.pile
    }

    #[must_use]
    pub fn pass_marker(&self) -> Option<PlayerId> {
        self.pass_marker
    }

    /// Finished players, first finisher first.
    #[must_use]
    pub fn finish_order(&self) -> &[PlayerId] {
        &self.finish_order
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.seats.len() <= 1
    }

    // === Pass-around ===

    /// True when the turn has come back to the pass marker.
    #[must_use]
    pub fn pass_around_complete(&self) -> bool {
        !self.is_terminal() && self.pass_marker == Some(self.active)
    }

    /// Clear the table after everyone passed; the active player leads.
    pub fn clear_pass_around(&mut self) -> PlayerId {
        log::trace!("pass-around complete, {} leads", self.active);
        self.pile = Play::pass();
        self.pass_marker = None;
        self.active
    }

    // === Transitions ===

    /// Commit an accepted play.
    ///
    /// `hand_emptied` reports whether the play used the player's last cards.
    /// Legality is not re-checked here; callers run `ActionEvaluator` first.
    pub fn apply(
        &mut self,
        player: PlayerId,
        play: &Play,
        outcome: Outcome,
        hand_emptied: bool,
    ) -> Result<Transition> {
        if self.is_terminal() {
            return Err(PresidentError::GameOver);
        }
        let pos = self
            .seat_position(player)
            .ok_or(PresidentError::UnknownPlayer(player))?;
        let finished = hand_emptied && outcome != Outcome::Pass;

        self.turn += 1;
        self.history.push_back(ActionRecord {
            player,
            play: play.clone(),
            outcome,
            turn: self.turn,
            finished,
        });

        let mut placement = None;
        if finished {
            self.seats.remove(pos);
            self.finish_order.push(player);
            placement = Some(Placement {
                player,
                place: self.finish_order.len(),
            });
        }

        if self.seats.len() == 1 {
            let last = self.seats[0];
            self.finish_order.push(last);
            self.active = last;
            self.pile = Play::pass();
            self.pass_marker = None;
            return Ok(Transition {
                outcome,
                finished: placement,
                next_player: last,
                game_over: true,
            });
        }

        let len = self.seats.len();
        match outcome {
            Outcome::Pass => {
                if self.pass_marker.is_none() && !self.pile.is_pass() {
                    self.pass_marker = Some(player);
                }
                self.active = self.seats[(pos + 1) % len];
            }
            Outcome::Clear => {
                self.pile = Play::pass();
                self.pass_marker = None;
                // A finished clearer hands the lead to whoever now sits in
                // their place.
                self.active = if finished { self.seats[pos % len] } else { player };
            }
            Outcome::Skip => {
                self.pile = play.clone();
                if finished {
                    self.pass_marker = None;
                    self.active = self.seats[(pos + 1) % len];
                } else {
                    self.pass_marker = Some(player);
                    self.active = self.seats[(pos + 2) % len];
                }
            }
            Outcome::Normal => {
                self.pile = play.clone();
                if finished {
                    self.pass_marker = None;
                    self.active = self.seats[pos % len];
                } else {
                    self.pass_marker = Some(player);
                    self.active = self.seats[(pos + 1) % len];
                }
            }
        }

        log::trace!(
            "{} {} -> {} to act, pile {}",
            player,
            outcome,
            self.active,
            self.pile
        );

        Ok(Transition {
            outcome,
            finished: placement,
            next_player: self.active,
            game_over: false,
        })
    }
}
