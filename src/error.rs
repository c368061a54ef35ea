//! Error type shared by the whole crate.
//!
//! Every variant is fatal for the game in progress: the engine has no I/O that
//! could fail transiently, so an error always means a broken invariant, a bad
//! deck or configuration, or a caller that fed the engine an illegal action.

use thiserror::Error;

use crate::core::PlayerId;

/// Errors raised while building or running a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PresidentError {
    /// The legal action union was empty. Cannot happen while the pass-around
    /// clear is applied, so this signals a modelling bug.
    #[error("no legal actions on turn {turn}")]
    NoLegalActions { turn: u32 },

    /// The decision policy returned an action that was not offered to it.
    #[error("policy selected {action}, which is not among the {offered} offered actions")]
    InvalidPolicySelection { action: String, offered: usize },

    /// The deck is not a partition of the 52 standard cards.
    #[error("malformed deck: {0}")]
    MalformedDeck(String),

    /// An externally applied action broke a rule or used unheld cards.
    #[error("illegal action by {player}: {play}")]
    IllegalAction { player: PlayerId, play: String },

    /// A grouping that is not 0-4 distinct cards of one rank.
    #[error("invalid play: {0}")]
    InvalidPlay(String),

    /// Card text that does not parse.
    #[error("invalid card {0:?}")]
    InvalidCard(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The player is not seated, or has already finished.
    #[error("{0} is not among the remaining players")]
    UnknownPlayer(PlayerId),

    #[error("the game is already over")]
    GameOver,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PresidentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_invariant() {
        let err = PresidentError::NoLegalActions { turn: 7 };
        assert_eq!(err.to_string(), "no legal actions on turn 7");

        let err = PresidentError::UnknownPlayer(PlayerId::new(3));
        assert_eq!(err.to_string(), "Player 3 is not among the remaining players");

        let err = PresidentError::InvalidPolicySelection {
            action: "Player 1: [5S]".to_string(),
            offered: 4,
        };
        assert!(err.to_string().contains("not among the 4 offered actions"));
    }
}
