//! The 52-card deck: construction, validation, shuffling and dealing.

use rustc_hash::FxHashSet;

use super::card::{Card, Rank, Suit};
use super::hand::Hand;
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::error::{PresidentError, Result};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// A deck that deals from the top (the end of the card list).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in rank-then-suit order.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// A standard deck shuffled with the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Use a caller-supplied card order. The cards must be exactly the 52
    /// standard cards, each once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.len() != DECK_SIZE {
            return Err(PresidentError::MalformedDeck(format!(
                "expected {} cards, got {}",
                DECK_SIZE,
                cards.len()
            )));
        }
        let mut seen = FxHashSet::default();
        if let Some(dup) = cards.iter().find(|&&c| !seen.insert(c)) {
            return Err(PresidentError::MalformedDeck(format!("{} appears twice", dup)));
        }
        Ok(Self { cards })
    }

    /// Take the top card.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remaining cards, bottom first.
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

    /// Deal one card at a time to each seat in turn until the deck runs out.
    ///
    /// With 52 cards the first `52 % player_count` seats get one extra card.
    pub fn deal_round_robin(mut self, player_count: usize) -> Result<PlayerMap<Hand>> {
        let mut hands = PlayerMap::from_vec((0..player_count).map(|_| Hand::new()).collect())
            .ok_or_else(|| {
                PresidentError::InvalidConfig(format!("cannot deal to {} players", player_count))
            })?;
        let mut seats = (0..player_count).cycle().map(|i| PlayerId::new(i as u8));
        while let Some(card) = self.deal() {
            let Some(seat) = seats.next() else { break };
            if !hands[seat].insert(card) {
                return Err(PresidentError::MalformedDeck(format!("{} dealt twice", card)));
            }
        }
        Ok(hands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_is_complete() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: FxHashSet<_> = deck.cards.iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Deck::shuffled(&mut GameRng::new(3));
        let b = Deck::shuffled(&mut GameRng::new(3));
        let c = Deck::shuffled(&mut GameRng::new(4));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(Deck::from_cards(a.cards.clone()).is_ok());
    }

    #[test]
    fn test_from_cards_rejects_short_deck() {
        let mut cards = Deck::standard().cards;
        cards.pop();
        assert!(matches!(
            Deck::from_cards(cards),
            Err(PresidentError::MalformedDeck(_))
        ));
    }

    #[test]
    fn test_from_cards_rejects_duplicates() {
        let mut cards = Deck::standard().cards;
        cards[51] = cards[0];
        let err = Deck::from_cards(cards).unwrap_err();
        assert_eq!(err, PresidentError::MalformedDeck("2S appears twice".to_string()));
    }

    #[test]
    fn test_deal_round_robin_four_players() {
        let hands = Deck::standard().deal_round_robin(4).unwrap();

        for (_, hand) in hands.iter() {
            assert_eq!(hand.len(), 13);
        }
        // Top of the deck (last card, AC) goes to seat 0
        assert!(hands[PlayerId::new(0)].contains(&"AC".parse().unwrap()));
    }

    #[test]
    fn test_deal_round_robin_uneven() {
        let hands = Deck::standard().deal_round_robin(5).unwrap();
        let sizes: Vec<_> = hands.iter().map(|(_, h)| h.len()).collect();
        assert_eq!(sizes, vec![11, 11, 10, 10, 10]);
    }

    #[test]
    fn test_deal_empties_deck() {
        let mut deck = Deck::standard();
        let mut dealt = 0;
        while deck.deal().is_some() {
            dealt += 1;
        }
        assert_eq!(dealt, DECK_SIZE);
        assert!(deck.is_empty());
    }
}
