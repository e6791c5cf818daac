#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use card::*;
pub use deck::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use scheduler::*;
pub use session::*;
pub use types::*;
pub use view::*;

mod card;
mod deck;
mod engine;
mod error;
mod generator;
mod scheduler;
mod session;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub pairs: PairCount,
    /// `None` plays without a countdown.
    pub time_limit: Option<Seconds>,
    pub pacing: Pacing,
}

impl GameConfig {
    pub const fn new_unchecked(pairs: PairCount, time_limit: Option<Seconds>, pacing: Pacing) -> Self {
        Self {
            pairs,
            time_limit,
            pacing,
        }
    }

    pub fn new(pairs: PairCount, time_limit: Option<Seconds>) -> Self {
        let pairs = pairs.clamp(1, MAX_PAIRS);
        let time_limit = time_limit.map(|limit| limit.max(1));
        Self::new_unchecked(pairs, time_limit, Pacing::default())
    }

    pub fn timed(time_limit: Seconds) -> Self {
        Self::new(DEFAULT_PAIRS, Some(time_limit))
    }

    pub fn with_time_limit(self, time_limit: Option<Seconds>) -> Self {
        Self::new_unchecked(self.pairs, time_limit.map(|limit| limit.max(1)), self.pacing)
    }

    pub const fn with_pacing(self, pacing: Pacing) -> Self {
        Self::new_unchecked(self.pairs, self.time_limit, pacing)
    }

    pub const fn is_timed(&self) -> bool {
        self.time_limit.is_some()
    }

    pub const fn total_cards(&self) -> usize {
        card_count(self.pairs)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_PAIRS, None, Pacing::default())
    }
}

/// Both cards of a completed reveal, waiting for the pacing delay before resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCheck {
    pub first: CardId,
    pub second: CardId,
    pub is_match: bool,
    pub delay: core::time::Duration,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Flipped,
    PairPending(PairCheck),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Flipped => true,
            PairPending(_) => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResolveOutcome {
    NoChange,
    Matched,
    Mismatched,
    Completed,
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    NoChange,
    Ticked(Seconds),
    Expired,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_clamps_pairs_and_limit() {
        let config = GameConfig::new(0, Some(0));
        assert_eq!(config.pairs, 1);
        assert_eq!(config.time_limit, Some(1));

        let config = GameConfig::new(200, None);
        assert_eq!(config.pairs, MAX_PAIRS);
        assert!(!config.is_timed());
    }

    #[test]
    fn default_config_is_untimed_sixteen_cards() {
        let config = GameConfig::default();
        assert_eq!(config.total_cards(), 16);
        assert_eq!(config.time_limit, None);
        assert_eq!(config.pacing, Pacing::default());
    }
}
