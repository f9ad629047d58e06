//! Wall-clock abstraction so the showcase can run against frozen time.

use chrono::{DateTime, FixedOffset, Local};

use crate::formatter::parse_instant;

/// Source of "now" for the showcase panel.
///
/// `None` means the clock could not produce a valid instant; the formatter
/// renders that as `"Invalid Date"`.
pub trait Clock: Send + Sync {
    fn now(&self) -> Option<DateTime<FixedOffset>>;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Option<DateTime<FixedOffset>> {
        Some(Local::now().fixed_offset())
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Option<DateTime<FixedOffset>>,
}

impl FixedClock {
    /// Freeze at an RFC 3339 timestamp. An unparseable string yields a clock
    /// that only ever reports an invalid instant.
    pub fn parse(raw: &str) -> Self {
        let now = parse_instant(raw);
        if now.is_none() {
            tracing::warn!("Frozen time {:?} is not RFC 3339, clock will report an invalid date", raw);
        }
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Option<DateTime<FixedOffset>> {
        self.now
    }
}
