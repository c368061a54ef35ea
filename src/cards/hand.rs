//! A player's hand and the groupings it can offer.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank};
use crate::core::{Play, MAX_GROUP};
use crate::error::{PresidentError, Result};

/// Cards held by one player, kept sorted by rank then suit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from dealt cards. Repeated cards are rejected.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut hand = Self::new();
        for card in cards {
            if !hand.insert(card) {
                return Err(PresidentError::InvalidPlay(format!(
                    "{} dealt twice to one hand",
                    card
                )));
            }
        }
        Ok(hand)
    }

    /// Parse whitespace separated cards, e.g. `"5S 5H KD"`.
    pub fn parse(text: &str) -> Result<Self> {
        let cards = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>>>()?;
        Self::from_cards(cards)
    }

    /// Add a dealt card. Returns `false` if the hand already holds it.
    pub fn insert(&mut self, card: Card) -> bool {
        match self.cards.binary_search(&card) {
            Ok(_) => false,
            Err(at) => {
                self.cards.insert(at, card);
                true
            }
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.binary_search(card).is_ok()
    }

    /// True if every card of the play is in this hand.
    #[must_use]
    pub fn contains_play(&self, play: &Play) -> bool {
        play.cards().iter().all(|c| self.contains(c))
    }

    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank == rank).count()
    }

    /// Remove the cards of a play. Nothing is removed if any card is missing.
    pub fn remove_play(&mut self, play: &Play) -> Result<()> {
        if let Some(missing) = play.cards().iter().find(|c| !self.contains(c)) {
            return Err(PresidentError::InvalidPlay(format!("{} is not in hand", missing)));
        }
        self.cards.retain(|c| !play.contains(c));
        Ok(())
    }

    /// Every grouping this hand could offer, ignoring the table.
    ///
    /// Order: each single card, the pass, then pairs, triples and
    /// quadruples by ascending rank. Each set of cards appears exactly once.
    #[must_use]
    pub fn possible_moves(&self) -> Vec<Play> {
        let mut moves: Vec<Play> = self.cards.iter().copied().map(Play::single).collect();
        moves.push(Play::pass());

        for size in 2..=MAX_GROUP {
            for group in self.rank_groups() {
                combinations(group, size, &mut Vec::with_capacity(size), &mut moves);
            }
        }
        moves
    }

    /// Runs of equal rank in the sorted card list.
    fn rank_groups(&self) -> impl Iterator<Item = &[Card]> {
        let mut rest = self.cards.as_slice();
        std::iter::from_fn(move || {
            let first = rest.first()?;
            let len = rest.iter().take_while(|c| c.rank == first.rank).count();
            let (group, tail) = rest.split_at(len);
            rest = tail;
            Some(group)
        })
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = PresidentError;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Self::from_cards(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

/// Push every `size`-subset of `pool` (which shares one rank) onto `out`.
fn combinations(pool: &[Card], size: usize, current: &mut Vec<Card>, out: &mut Vec<Play>) {
    if current.len() == size {
        out.push(Play::from_sorted(current));
        return;
    }
    let needed = size - current.len();
    if pool.len() < needed {
        return;
    }
    for (i, &card) in pool.iter().enumerate().take(pool.len() - needed + 1) {
        current.push(card);
        combinations(&pool[i + 1..], size, current, out);
        current.pop();
    }
}
