use serde::{Deserialize, Serialize};

use crate::types::{CardId, SymbolId};

/// Which side of a card is visible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Hidden,
    Flipped,
    Matched,
}

impl CardFace {
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Flipped | Self::Matched)
    }
}

impl Default for CardFace {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    symbol: SymbolId,
    face: CardFace,
}

impl Card {
    pub const fn new(id: CardId, symbol: SymbolId) -> Self {
        Self {
            id,
            symbol,
            face: CardFace::Hidden,
        }
    }

    pub const fn id(&self) -> CardId {
        self.id
    }

    pub const fn symbol(&self) -> SymbolId {
        self.symbol
    }

    pub const fn face(&self) -> CardFace {
        self.face
    }

    /// Matched cards stay face-up, so this is also true for them.
    pub const fn is_flipped(&self) -> bool {
        self.face.is_face_up()
    }

    pub const fn is_matched(&self) -> bool {
        matches!(self.face, CardFace::Matched)
    }

    pub(crate) fn set_face(&mut self, face: CardFace) {
        self.face = face;
    }
}
