use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub symbol: SymbolId,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            symbol: card.symbol(),
            is_flipped: card.is_flipped(),
            is_matched: card.is_matched(),
        }
    }
}

/// Everything a presentation layer needs to draw one frame of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub cards: Vec<CardView>,
    pub state: EngineState,
    pub moves: u32,
    pub matched_pairs: PairCount,
    pub total_pairs: PairCount,
    pub is_completed: bool,
    pub has_failed: bool,
    pub time_left: Option<Seconds>,
    pub time_limit: Option<Seconds>,
}

impl SessionView {
    pub fn from_engine(engine: &MatchEngine) -> Self {
        Self {
            cards: engine.cards().iter().map(CardView::from).collect(),
            state: engine.state(),
            moves: engine.moves(),
            matched_pairs: engine.matched_pairs(),
            total_pairs: engine.total_pairs(),
            is_completed: engine.is_completed(),
            has_failed: engine.has_failed(),
            time_left: engine.time_left(),
            time_limit: engine.time_limit(),
        }
    }
}
