//! Actions: a grouping of cards (`Play`) owned by a player.
//!
//! A `Play` is zero to four cards of one rank. The empty play is the pass.
//! Cards are kept sorted, so two plays naming the same set of cards are equal
//! and hash equally no matter what order they were built in.
//!
//! ```
//! use rust_president::core::Play;
//!
//! let a = Play::parse("5S 5H").unwrap();
//! let b = Play::parse("5H 5S").unwrap();
//! assert_eq!(a, b);
//! assert!(Play::parse("5S 6S").is_err());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::player::PlayerId;
use crate::cards::{Card, Rank};
use crate::error::{PresidentError, Result};

/// Largest grouping: all four suits of a rank.
pub const MAX_GROUP: usize = 4;

/// A candidate play: 0-4 distinct cards sharing one rank.
///
/// Serialized as a plain card list; deserializing goes through `Play::new`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Play {
    /// Sorted; SmallVec keeps every grouping off the heap.
    cards: SmallVec<[Card; MAX_GROUP]>,
}

impl Play {
    /// The empty play.
    #[must_use]
    pub fn pass() -> Self {
        Self::default()
    }

    /// A single card.
    #[must_use]
    pub fn single(card: Card) -> Self {
        let mut cards = SmallVec::new();
        cards.push(card);
        Self { cards }
    }

    /// Build a play, validating rank uniformity, distinctness and size.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut cards: SmallVec<[Card; MAX_GROUP]> = cards.into_iter().collect();
        if cards.len() > MAX_GROUP {
            return Err(PresidentError::InvalidPlay(format!(
                "{} cards in one grouping",
                cards.len()
            )));
        }
        cards.sort_unstable();
        if let Some(first) = cards.first() {
            if cards.iter().any(|c| c.rank != first.rank) {
                return Err(PresidentError::InvalidPlay("mixed ranks".to_string()));
            }
        }
        if cards.windows(2).any(|w| w[0] == w[1]) {
            return Err(PresidentError::InvalidPlay("repeated card".to_string()));
        }
        Ok(Self { cards })
    }

    /// Parse whitespace separated cards, e.g. `"5S 5H"`. Empty text is a pass.
    pub fn parse(text: &str) -> Result<Self> {
        let cards = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>>>()?;
        Self::new(cards)
    }

    /// Build from cards already known to be sorted, distinct and same-rank.
    pub(crate) fn from_sorted(cards: &[Card]) -> Self {
        debug_assert!(cards.windows(2).all(|w| w[0] < w[1] && w[0].rank == w[1].rank));
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shared rank, or `None` for the pass.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        self.cards.first().map(|c| c.rank)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl TryFrom<Vec<Card>> for Play {
    type Error = PresidentError;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Self::new(cards)
    }
}

impl From<Play> for Vec<Card> {
    fn from(play: Play) -> Self {
        play.cards.into_vec()
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            return f.write_str("pass");
        }
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        f.write_str("]")
    }
}

/// A play tagged with the player making it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub player: PlayerId,
    pub play: Play,
}

impl Action {
    #[must_use]
    pub fn new(player: PlayerId, play: Play) -> Self {
        Self { player, play }
    }

    #[must_use]
    pub fn pass(player: PlayerId) -> Self {
        Self::new(player, Play::pass())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.player, self.play)
    }
}

/// What an accepted play does to the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Empty play; the pile stays.
    Pass,
    /// Pile replaced, turn moves one seat.
    Normal,
    /// Same rank as the pile: pile replaced, next seat bypassed once.
    Skip,
    /// Four of a rank on the table: pile emptied.
    Clear,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Pass => "pass",
            Outcome::Normal => "normal",
            Outcome::Skip => "skip",
            Outcome::Clear => "clear",
        };
        f.write_str(name)
    }
}

/// An accepted action with its outcome, kept in the state history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub play: Play,
    pub outcome: Outcome,
    /// Turn counter when the action was taken.
    pub turn: u32,
    /// Whether this play emptied the player's hand.
    pub finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_pass() {
        let pass = Play::pass();
        assert!(pass.is_pass());
        assert_eq!(pass.len(), 0);
        assert_eq!(pass.rank(), None);
        assert_eq!(pass.to_string(), "pass");
    }

    #[test]
    fn test_play_is_canonical() {
        let a = Play::new([card("9C"), card("9S"), card("9H")]).unwrap();
        let b = Play::new([card("9H"), card("9C"), card("9S")]).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.rank(), Some(Rank::Nine));
        assert_eq!(a.cards()[0].suit, Suit::Spades);
    }

    #[test]
    fn test_play_rejects_bad_groupings() {
        assert!(Play::new([card("5S"), card("6S")]).is_err());
        assert!(Play::new([card("5S"), card("5S")]).is_err());
        assert!(Play::parse("5S 5H 5D 5C 5S").is_err());
        assert!(Play::parse("5S XX").is_err());
    }

    #[test]
    fn test_play_display() {
        let play = Play::parse("KD KS").unwrap();
        assert_eq!(play.to_string(), "[KS KD]");

        let action = Action::new(PlayerId::new(2), play);
        assert_eq!(action.to_string(), "Player 2: [KS KD]");
    }

    #[test]
    fn test_single() {
        let play = Play::single(card("10H"));
        assert_eq!(play.len(), 1);
        assert!(play.contains(&card("10H")));
        assert_eq!(play, Play::parse("10H").unwrap());
    }

    #[test]
    fn test_play_deserialization_validates() {
        let json = serde_json::to_string(&Play::parse("7D 7S").unwrap()).unwrap();
        let back: Play = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Play::parse("7S 7D").unwrap());

        // Out of order on the wire still comes back sorted
        let reversed = serde_json::to_string(&vec![card("7D"), card("7S")]).unwrap();
        let back: Play = serde_json::from_str(&reversed).unwrap();
        assert_eq!(back.cards()[0], card("7S"));

        let mixed = serde_json::to_string(&vec![card("7S"), card("8S")]).unwrap();
        assert!(serde_json::from_str::<Play>(&mixed).is_err());

        let repeated = serde_json::to_string(&vec![card("7S"), card("7S")]).unwrap();
        assert!(serde_json::from_str::<Play>(&repeated).is_err());
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord {
            player: PlayerId::new(1),
            play: Play::parse("7S 7D").unwrap(),
            outcome: Outcome::Skip,
            turn: 3,
            finished: false,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
