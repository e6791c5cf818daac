use core::time::Duration;

use crate::*;

/// One play-through plus the timers it owns.
///
/// Starting a new game drops every outstanding handle before the new deck is dealt, and each
/// scheduled [`TimerEvent`] is tagged with the generation it belongs to. Dropping the session
/// cancels everything it scheduled.
pub struct Session<S: Scheduler> {
    config: GameConfig,
    engine: MatchEngine,
    scheduler: S,
    seed: u64,
    generation: u64,
    resolution: Option<S::Handle>,
    countdown: Option<S::Handle>,
}

impl<S: Scheduler> Session<S> {
    pub fn new(config: GameConfig, scheduler: S, seed: u64) -> Self {
        let engine = deal(&config, seed, 0);
        log::debug!("new game: {:?}", config);
        Self {
            config,
            engine,
            scheduler,
            seed,
            generation: 0,
            resolution: None,
            countdown: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn has_pending_resolution(&self) -> bool {
        self.resolution.is_some()
    }

    pub fn is_countdown_scheduled(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn view(&self) -> SessionView {
        SessionView::from_engine(&self.engine)
    }

    /// Changes the seed used for every following deal.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Starts over. `Some(limit)` switches to a timed game, `None` keeps the current limit.
    pub fn new_game(&mut self, time_limit: Option<Seconds>) {
        if let Some(limit) = time_limit {
            self.config = self.config.with_time_limit(Some(limit));
        }
        self.restart();
    }

    /// Starts over without a countdown.
    pub fn new_game_untimed(&mut self) {
        self.config = self.config.with_time_limit(None);
        self.restart();
    }

    /// Returns whether the reveal changed anything, rejected reveals are ignored.
    pub fn reveal_card(&mut self, id: CardId) -> bool {
        let was_running = self.engine.is_timer_running();

        let outcome = match self.engine.reveal(id) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::trace!("reveal {} ignored: {}", id, err);
                return false;
            }
        };

        if !was_running && self.engine.is_timer_running() {
            log::debug!("countdown started");
            let event = TimerEvent::Tick {
                generation: self.generation,
            };
            self.countdown = Some(self.scheduler.schedule_every(TICK_PERIOD, event));
        }

        match outcome {
            RevealOutcome::NoChange => {
                log::trace!("reveal {} ignored: already face-up", id);
                false
            }
            RevealOutcome::Flipped => true,
            RevealOutcome::PairPending(check) => {
                log::debug!(
                    "checking {} and {} (match: {}), resolving in {:?}",
                    check.first,
                    check.second,
                    check.is_match,
                    check.delay
                );
                let event = TimerEvent::ResolvePair {
                    generation: self.generation,
                };
                self.resolution = Some(self.scheduler.schedule_once(check.delay, event));
                true
            }
        }
    }

    /// Applies a timer event delivered by the host. Returns whether anything changed.
    pub fn handle(&mut self, event: TimerEvent) -> bool {
        if event.generation() != self.generation {
            log::debug!("dropping stale {:?}, current generation {}", event, self.generation);
            return false;
        }

        match event {
            TimerEvent::ResolvePair { .. } => {
                self.resolution = None;
                let outcome = self.engine.resolve_pending();
                if outcome == ResolveOutcome::Completed {
                    log::debug!("completed in {} moves", self.engine.moves());
                    self.countdown = None;
                }
                outcome.has_update()
            }
            TimerEvent::Tick { .. } => {
                let outcome = self.engine.tick();
                if outcome == TickOutcome::Expired {
                    log::debug!(
                        "time is up with {} of {} pairs",
                        self.engine.matched_pairs(),
                        self.engine.total_pairs()
                    );
                    self.countdown = None;
                }
                outcome.has_update()
            }
        }
    }

    /// Tears the session down, canceling its timers, and hands the scheduler back.
    pub fn into_scheduler(self) -> S {
        let Self { scheduler, .. } = self;
        scheduler
    }

    fn restart(&mut self) {
        self.cancel_timers();
        self.generation += 1;
        self.engine = deal(&self.config, self.seed, self.generation);
        log::debug!("new game #{}: {:?}", self.generation, self.config);
    }

    fn cancel_timers(&mut self) {
        self.resolution = None;
        self.countdown = None;
    }
}

impl Session<ManualScheduler> {
    /// Moves virtual time forward, handling events one at a time so a handler can still cancel
    /// a task that falls due later within the same step.
    pub fn advance(&mut self, by: Duration) -> bool {
        let deadline = self.scheduler.now() + by;
        let mut updated = false;
        while let Some(event) = self.scheduler.pop_due(deadline) {
            updated |= self.handle(event);
        }
        self.scheduler.advance_to(deadline);
        updated
    }
}

fn deal(config: &GameConfig, seed: u64, generation: u64) -> MatchEngine {
    // spreads consecutive generations over the seed space
    let seed = seed ^ generation.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let deck = ShuffledDeckGenerator::new(seed).generate(config.pairs);
    MatchEngine::from_config(deck, config)
}
