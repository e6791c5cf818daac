use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

use crate::*;

/// The ordered set of cards dealt for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    pairs: PairCount,
}

impl Deck {
    pub(crate) fn from_cards_unchecked(cards: Vec<Card>, pairs: PairCount) -> Self {
        Self { cards, pairs }
    }

    /// Builds a deck in the given order, assigning ids by position.
    ///
    /// Symbols must be `1..=pairs` and each must appear exactly twice.
    pub fn from_symbols(symbols: &[SymbolId]) -> Result<Self> {
        if symbols.is_empty() || symbols.len() % 2 != 0 || symbols.len() > card_count(MAX_PAIRS) {
            return Err(GameError::InvalidDeck);
        }

        let pairs = (symbols.len() / 2) as PairCount;
        let mut seen = [0u8; MAX_PAIRS as usize];
        for &symbol in symbols {
            if symbol == 0 || symbol > pairs {
                return Err(GameError::InvalidDeck);
            }
            seen[usize::from(symbol - 1)] += 1;
        }
        if seen[..usize::from(pairs)].iter().any(|&count| count != 2) {
            return Err(GameError::InvalidDeck);
        }

        let cards = symbols
            .iter()
            .enumerate()
            .map(|(id, &symbol)| Card::new(id as CardId, symbol))
            .collect();
        Ok(Self { cards, pairs })
    }

    pub fn pairs(&self) -> PairCount {
        self.pairs
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.position(id).map(|index| &self.cards[index])
    }

    pub fn validate_id(&self, id: CardId) -> Result<CardId> {
        self.position(id).map(|_| id).ok_or(GameError::UnknownCard)
    }

    fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }
}

impl Index<CardId> for Deck {
    type Output = Card;

    fn index(&self, id: CardId) -> &Self::Output {
        let index = self.position(id).expect("card id must be validated");
        &self.cards[index]
    }
}

impl IndexMut<CardId> for Deck {
    fn index_mut(&mut self, id: CardId) -> &mut Self::Output {
        let index = self.position(id).expect("card id must be validated");
        &mut self.cards[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_symbols_assigns_ids_by_position() {
        let deck = Deck::from_symbols(&[2, 1, 1, 2]).unwrap();

        assert_eq!(deck.pairs(), 2);
        assert_eq!(deck[0].symbol(), 2);
        assert_eq!(deck[3].symbol(), 2);
        assert_eq!(deck.get(4), None);
        assert_eq!(deck.validate_id(4), Err(GameError::UnknownCard));
    }

    #[test]
    fn from_symbols_rejects_malformed_layouts() {
        assert_eq!(Deck::from_symbols(&[]), Err(GameError::InvalidDeck));
        assert_eq!(Deck::from_symbols(&[1, 1, 1]), Err(GameError::InvalidDeck));
        assert_eq!(Deck::from_symbols(&[1, 1, 1, 1]), Err(GameError::InvalidDeck));
        assert_eq!(Deck::from_symbols(&[1, 3, 1, 3]), Err(GameError::InvalidDeck));
        assert_eq!(Deck::from_symbols(&[0, 0]), Err(GameError::InvalidDeck));
    }
}
