use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Deferred work a session asks its host to deliver back later.
///
/// Each event carries the generation of the game that scheduled it, so a host that delivers an
/// event after a reset cannot touch the new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    ResolvePair { generation: u64 },
    Tick { generation: u64 },
}

impl TimerEvent {
    pub const fn generation(self) -> u64 {
        match self {
            Self::ResolvePair { generation } | Self::Tick { generation } => generation,
        }
    }
}

/// Source of timers for a session.
///
/// Dropping a returned handle must cancel the task, the same way `gloo` timers behave.
pub trait Scheduler {
    type Handle;

    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> Self::Handle;

    fn schedule_every(&mut self, period: Duration, event: TimerEvent) -> Self::Handle;
}

/// Handle into a [`ManualScheduler`], cancels its task when dropped.
#[derive(Debug)]
pub struct ManualHandle {
    _alive: Rc<()>,
}

#[derive(Debug)]
struct ManualTask {
    due: Duration,
    seq: u64,
    period: Option<Duration>,
    event: TimerEvent,
    alive: Weak<()>,
}

impl ManualTask {
    fn is_canceled(&self) -> bool {
        self.alive.strong_count() == 0
    }
}

/// Virtual-time scheduler, time only moves when the caller advances it.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_seq: u64,
    tasks: Vec<ManualTask>,
}

impl ManualScheduler {
    // keeps a zero-period interval from firing forever within one advance
    const MIN_PERIOD: Duration = Duration::from_millis(1);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks that are still armed.
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_canceled()).count()
    }

    /// Pops the earliest live task due at or before `deadline`, moving the clock to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TimerEvent> {
        self.tasks.retain(|task| !task.is_canceled());

        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= deadline)
            .min_by_key(|(_, task)| (task.due, task.seq))
            .map(|(index, _)| index)?;

        let seq = self.bump_seq();
        let task = &mut self.tasks[index];
        let event = task.event;
        let period = task.period;
        self.now = self.now.max(task.due);

        match period {
            Some(period) => {
                task.due += period;
                task.seq = seq;
            }
            None => {
                self.tasks.swap_remove(index);
            }
        }

        Some(event)
    }

    /// Moves the clock forward without firing anything.
    pub fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    /// Moves the clock forward by `by`, returning every event that came due in firing order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerEvent> {
        let deadline = self.now + by;
        let mut fired = Vec::new();
        while let Some(event) = self.pop_due(deadline) {
            fired.push(event);
        }
        self.advance_to(deadline);
        fired
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, event: TimerEvent) -> ManualHandle {
        let alive = Rc::new(());
        let seq = self.bump_seq();
        self.tasks.push(ManualTask {
            due: self.now + delay,
            seq,
            period,
            event,
            alive: Rc::downgrade(&alive),
        });
        ManualHandle { _alive: alive }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> Self::Handle {
        self.push(delay, None, event)
    }

    fn schedule_every(&mut self, period: Duration, event: TimerEvent) -> Self::Handle {
        let period = period.max(Self::MIN_PERIOD);
        self.push(period, Some(period), event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const RESOLVE: TimerEvent = TimerEvent::ResolvePair { generation: 0 };
    const TICK: TimerEvent = TimerEvent::Tick { generation: 0 };

    fn secs(secs: u64) -> Duration {
        Duration::from_secs(secs)
    }

    #[test]
    fn once_fires_a_single_time() {
        let mut scheduler = ManualScheduler::new();
        let _handle = scheduler.schedule_once(secs(1), RESOLVE);

        assert_eq!(scheduler.advance(Duration::from_millis(999)), vec![]);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![RESOLVE]);
        assert_eq!(scheduler.advance(secs(10)), vec![]);
    }

    #[test]
    fn interval_repeats_until_dropped() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule_every(secs(1), TICK);

        assert_eq!(scheduler.advance(secs(3)), vec![TICK, TICK, TICK]);
        assert_eq!(scheduler.now(), secs(3));

        drop(handle);
        assert_eq!(scheduler.advance(secs(3)), vec![]);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn dropped_once_never_fires() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule_once(secs(1), RESOLVE);
        assert_eq!(scheduler.pending_count(), 1);

        drop(handle);
        assert_eq!(scheduler.advance(secs(2)), vec![]);
    }

    #[test]
    fn events_fire_in_due_order() {
        let mut scheduler = ManualScheduler::new();
        let _tick = scheduler.schedule_every(secs(1), TICK);
        let _resolve = scheduler.schedule_once(Duration::from_millis(1500), RESOLVE);

        assert_eq!(scheduler.advance(secs(2)), vec![TICK, RESOLVE, TICK]);
    }

    #[test]
    fn pop_due_moves_clock_to_task() {
        let mut scheduler = ManualScheduler::new();
        let _resolve = scheduler.schedule_once(Duration::from_millis(1500), RESOLVE);

        assert_eq!(scheduler.pop_due(secs(5)), Some(RESOLVE));
        assert_eq!(scheduler.now(), Duration::from_millis(1500));
        assert_eq!(scheduler.pop_due(secs(5)), None);
    }
}
