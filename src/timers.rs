//! Periodic timers for the showcase panel
//!
//! Each timer is a tokio task that pushes `Event::Timer(kind, generation)`
//! into the app's event channel once per period. The guard owns the task:
//! dropping it aborts the task, so a timer can never outlive the view that
//! started it. Ticks already queued when it is dropped still carry the old
//! generation, which is how the receiver tells them apart from a later mount.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::event::{Event, TimerKind};

pub const DEFAULT_CLOCK_INTERVAL: Duration = Duration::from_millis(1000);
pub const DEFAULT_CAROUSEL_INTERVAL: Duration = Duration::from_millis(8000);

/// Periods for the two showcase timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerIntervals {
    pub clock: Duration,
    pub carousel: Duration,
}

impl Default for TimerIntervals {
    fn default() -> Self {
        Self {
            clock: DEFAULT_CLOCK_INTERVAL,
            carousel: DEFAULT_CAROUSEL_INTERVAL,
        }
    }
}

impl TimerIntervals {
    /// Build from millisecond settings. Zero periods fall back to the defaults.
    pub fn from_millis(clock_ms: u64, carousel_ms: u64) -> Self {
        let pick = |ms: u64, fallback: Duration, name: &str| {
            if ms == 0 {
                tracing::warn!("{} interval of 0 ms is not allowed, using {:?}", name, fallback);
                fallback
            } else {
                Duration::from_millis(ms)
            }
        };

        Self {
            clock: pick(clock_ms, DEFAULT_CLOCK_INTERVAL, "Clock"),
            carousel: pick(carousel_ms, DEFAULT_CAROUSEL_INTERVAL, "Carousel"),
        }
    }
}

/// A running periodic timer. Aborted on drop.
#[derive(Debug)]
pub struct PeriodicTimer {
    kind: TimerKind,
    period: Duration,
    handle: JoinHandle<()>,
}

impl PeriodicTimer {
    /// Start emitting `kind` every `period`. The first tick arrives one full
    /// period after start. Must be called inside a tokio runtime.
    pub fn start(
        kind: TimerKind,
        period: Duration,
        generation: u64,
        tx: mpsc::UnboundedSender<Event>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(Event::Timer(kind, generation)).is_err() {
                    tracing::debug!("{:?} timer stopping, event channel closed", kind);
                    break;
                }
            }
        });

        tracing::debug!("Started {:?} timer every {:?} (generation {})", kind, period, generation);
        Self { kind, period, handle }
    }

    #[cfg(test)]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    #[cfg(test)]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for PeriodicTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("Stopped {:?} timer ({:?})", self.kind, self.period);
    }
}

/// The clock and carousel timers, acquired and released together. The
/// fields are only held for their `Drop`.
#[derive(Debug)]
pub struct ShowcaseTimers {
    _clock: PeriodicTimer,
    _carousel: PeriodicTimer,
}

impl ShowcaseTimers {
    pub fn start(intervals: TimerIntervals, generation: u64, tx: &mpsc::UnboundedSender<Event>) -> Self {
        Self {
            _clock: PeriodicTimer::start(TimerKind::Clock, intervals.clock, generation, tx.clone()),
            _carousel: PeriodicTimer::start(
                TimerKind::Carousel,
                intervals.carousel,
                generation,
                tx.clone(),
            ),
        }
    }

    #[cfg(test)]
    pub fn clock(&self) -> &PeriodicTimer {
        &self._clock
    }

    #[cfg(test)]
    pub fn carousel(&self) -> &PeriodicTimer {
        &self._carousel
    }
}
