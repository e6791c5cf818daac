use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Card identifier, unique within a deck.
pub type CardId = u8;

/// Symbol face value, shared by exactly two cards of a deck.
pub type SymbolId = u8;

/// Count type used for pair totals and matched pair counters.
pub type PairCount = u8;

/// Whole seconds, used by the countdown.
pub type Seconds = u32;

/// Upper bound on pairs in a deck, keeps every id representable as a `CardId`.
pub const MAX_PAIRS: PairCount = 64;

/// Pairs dealt by default, a 4x4 grid.
pub const DEFAULT_PAIRS: PairCount = 8;

/// Time limit used when a timed game is requested without an explicit limit.
pub const DEFAULT_TIME_LIMIT: Seconds = 30;

/// Period of the countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub const fn card_count(pairs: PairCount) -> usize {
    pairs as usize * 2
}

/// Display-only delays before a revealed pair is resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    pub match_delay: Duration,
    pub mismatch_delay: Duration,
}

impl Pacing {
    pub const fn new(match_delay: Duration, mismatch_delay: Duration) -> Self {
        Self {
            match_delay,
            mismatch_delay,
        }
    }

    /// No delay at all, resolution happens on the next scheduler turn.
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub const fn delay_for(&self, is_match: bool) -> Duration {
        if is_match {
            self.match_delay
        } else {
            self.mismatch_delay
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), Duration::from_millis(1500))
    }
}

/// Remaining time of a timed game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub limit: Seconds,
    pub left: Seconds,
}

impl Countdown {
    pub const fn new(limit: Seconds) -> Self {
        Self { limit, left: limit }
    }

    pub const fn is_expired(&self) -> bool {
        self.left == 0
    }
}
