//! Playing cards: rank, suit and the card value itself.
//!
//! Cards order by rank value first (2 lowest, Ace highest), so sorting a set
//! of cards groups equal ranks together. Suit only breaks ties to give a
//! total order; it never affects legality.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PresidentError;

/// Card rank. The discriminant is the rank value used for comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value: 2-10, then J=11, Q=12, K=13, A=14.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Short symbol used in card text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = PresidentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ALL
            .iter()
            .copied()
            .find(|rank| rank.value() == value)
            .ok_or_else(|| PresidentError::InvalidCard(format!("rank value {value}")))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit. Suits carry no hierarchy in President.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Rank value of this card (2-14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses text like `"7S"`, `"10h"` or `"QD"`.
impl FromStr for Card {
    type Err = PresidentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PresidentError::InvalidCard(s.to_string());
        let s = s.trim();
        let suit_char = s.chars().last().ok_or_else(invalid)?;
        let suit = Suit::from_symbol(suit_char).ok_or_else(invalid)?;
        let rank_text = &s[..s.len() - suit_char.len_utf8()];
        let rank = match rank_text.to_ascii_uppercase().as_str() {
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            digits => {
                let value: u8 = digits.parse().map_err(|_| invalid())?;
                Rank::try_from(value).map_err(|_| invalid())?
            }
        };
        Ok(Card::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Queen.value(), 12);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn test_rank_try_from() {
        assert_eq!(Rank::try_from(9).unwrap(), Rank::Nine);
        assert!(Rank::try_from(1).is_err());
        assert!(Rank::try_from(15).is_err());
    }

    #[test]
    fn test_card_order_follows_rank() {
        let two = Card::new(Rank::Two, Suit::Clubs);
        let ten = Card::new(Rank::Ten, Suit::Spades);
        let ace = Card::new(Rank::Ace, Suit::Spades);

        assert!(two < ten);
        assert!(ten < ace);
        assert!(Card::new(Rank::King, Suit::Clubs) < ace);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::Seven, Suit::Spades).to_string(), "7S");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10H");
        assert_eq!(Card::new(Rank::Queen, Suit::Diamonds).to_string(), "QD");
    }

    #[test]
    fn test_card_parse() {
        assert_eq!("7S".parse::<Card>().unwrap(), Card::new(Rank::Seven, Suit::Spades));
        assert_eq!("10h".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!("ac".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Clubs));

        assert!("1S".parse::<Card>().is_err());
        assert!("7X".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
        assert!("S".parse::<Card>().is_err());
    }

    #[test]
    fn test_card_display_parse_agree() {
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
            }
        }
    }
}
