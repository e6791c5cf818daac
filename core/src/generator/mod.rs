use crate::*;
pub use shuffled::*;

mod shuffled;

pub trait DeckGenerator {
    fn generate(self, pairs: PairCount) -> Deck;
}
