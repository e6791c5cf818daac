use core::num::Saturating;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Completed,
    Failed,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Cards flipped and not yet resolved, at most two.
pub type PendingCards = SmallVec<[CardId; 2]>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    deck: Deck,
    pacing: Pacing,
    pending: PendingCards,
    matched_pairs: Saturating<PairCount>,
    moves: Saturating<u32>,
    checking: bool,
    state: EngineState,
    countdown: Option<Countdown>,
}

impl MatchEngine {
    pub fn new(deck: Deck, time_limit: Option<Seconds>, pacing: Pacing) -> Self {
        Self {
            deck,
            pacing,
            pending: SmallVec::new(),
            matched_pairs: Saturating(0),
            moves: Saturating(0),
            checking: false,
            state: Default::default(),
            countdown: time_limit.map(Countdown::new),
        }
    }

    pub fn from_config(deck: Deck, config: &GameConfig) -> Self {
        if deck.pairs() != config.pairs {
            log::warn!(
                "Deck has {} pairs but config asks for {}, using the deck",
                deck.pairs(),
                config.pairs
            );
        }
        Self::new(deck, config.time_limit, config.pacing)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn has_started(&self) -> bool {
        !self.state.is_ready()
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, EngineState::Completed)
    }

    pub fn has_failed(&self) -> bool {
        matches!(self.state, EngineState::Failed)
    }

    pub fn is_checking(&self) -> bool {
        self.checking
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn matched_pairs(&self) -> PairCount {
        self.matched_pairs.0
    }

    pub fn total_pairs(&self) -> PairCount {
        self.deck.pairs()
    }

    pub fn time_limit(&self) -> Option<Seconds> {
        self.countdown.map(|countdown| countdown.limit)
    }

    pub fn time_left(&self) -> Option<Seconds> {
        self.countdown.map(|countdown| countdown.left)
    }

    /// Whether the countdown should currently be ticking.
    pub fn is_timer_running(&self) -> bool {
        matches!(self.state, EngineState::Active)
            && self.countdown.is_some_and(|countdown| !countdown.is_expired())
    }

    pub fn reveal(&mut self, id: CardId) -> Result<RevealOutcome> {
        let id = self.deck.validate_id(id)?;
        self.check_not_finished()?;
        self.check_not_busy()?;

        if self.deck[id].face() != CardFace::Hidden {
            return Ok(RevealOutcome::NoChange);
        }

        self.mark_started();
        self.deck[id].set_face(CardFace::Flipped);
        self.pending.push(id);

        let &[first, second] = &self.pending[..] else {
            return Ok(RevealOutcome::Flipped);
        };

        self.checking = true;
        self.moves += 1;

        let is_match = self.deck[first].symbol() == self.deck[second].symbol();
        Ok(RevealOutcome::PairPending(PairCheck {
            first,
            second,
            is_match,
            delay: self.pacing.delay_for(is_match),
        }))
    }

    /// Settles the pending pair: a match stays face-up for good, a mismatch turns back over.
    ///
    /// A pair revealed before the countdown ran out still settles, but a failed game stays failed.
    pub fn resolve_pending(&mut self) -> ResolveOutcome {
        let &[first, second] = &self.pending[..] else {
            return ResolveOutcome::NoChange;
        };
        self.pending.clear();
        self.checking = false;

        if self.deck[first].symbol() != self.deck[second].symbol() {
            self.deck[first].set_face(CardFace::Hidden);
            self.deck[second].set_face(CardFace::Hidden);
            return ResolveOutcome::Mismatched;
        }

        self.deck[first].set_face(CardFace::Matched);
        self.deck[second].set_face(CardFace::Matched);
        self.matched_pairs += 1;

        if self.matched_pairs.0 >= self.deck.pairs() && !self.has_failed() {
            self.state = EngineState::Completed;
            ResolveOutcome::Completed
        } else {
            ResolveOutcome::Matched
        }
    }

    /// Advances the countdown by one second, failing the game when it runs out.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_timer_running() {
            return TickOutcome::NoChange;
        }
        let Some(countdown) = self.countdown.as_mut() else {
            return TickOutcome::NoChange;
        };

        countdown.left -= 1;
        if countdown.is_expired() {
            self.state = EngineState::Failed;
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked(countdown.left)
        }
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = EngineState::Active;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn check_not_busy(&self) -> Result<()> {
        if self.checking || self.pending.len() >= 2 {
            Err(GameError::Busy)
        } else {
            Ok(())
        }
    }
}
