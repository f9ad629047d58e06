//! Showcase panel state and its mount lifecycle
//!
//! `Showcase` owns everything the left half of the screen displays: the
//! latest clock sample, the locale branch, the carousel index and the two
//! timers that drive them. Nothing is formatted before `mount()`; until then
//! the readouts show placeholder text so the first frame never depends on the
//! environment.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tokio::sync::mpsc;

use crate::carousel::Carousel;
use crate::clock::Clock;
use crate::error::Result;
use crate::event::{Event, TimerKind};
use crate::formatter::{build_month_grid, CalendarCell, DateFormatter};
use crate::locale::{LocaleMode, LocaleProvider};
use crate::testimonials::Testimonial;
use crate::timers::{ShowcaseTimers, TimerIntervals};

pub const TIME_PLACEHOLDER: &str = "Time";
pub const DATE_PLACEHOLDER: &str = "Date";

pub struct Showcase {
    clock: Arc<dyn Clock>,
    locale: Arc<dyn LocaleProvider>,
    intervals: TimerIntervals,
    testimonials: Vec<Testimonial>,
    carousel: Carousel,
    current_time: Option<DateTime<FixedOffset>>,
    locale_mode: LocaleMode,
    formatter: DateFormatter,
    mounted: bool,
    /// Bumped on every mount; ticks from an earlier mount carry a stale value
    generation: u64,
    timers: Option<ShowcaseTimers>,
}

impl Showcase {
    /// Fails with `EmptyCarousel` when there are no testimonials to rotate.
    pub fn new(
        clock: Arc<dyn Clock>,
        locale: Arc<dyn LocaleProvider>,
        testimonials: Vec<Testimonial>,
        intervals: TimerIntervals,
    ) -> Result<Self> {
        let carousel = Carousel::new(testimonials.len())?;
        Ok(Self {
            clock,
            locale,
            intervals,
            testimonials,
            carousel,
            current_time: None,
            locale_mode: LocaleMode::default(),
            formatter: DateFormatter::default(),
            mounted: false,
            generation: 0,
            timers: None,
        })
    }

    /// Activate the panel after its first paint: probe the locale once, take
    /// a clock sample, and start both timers. Mounting twice is a no-op.
    pub fn mount(&mut self, tx: &mpsc::UnboundedSender<Event>) {
        if self.mounted {
            return;
        }

        let tag = self.locale.language_tag();
        self.locale_mode = LocaleMode::from_tag(tag.as_deref());
        self.formatter = DateFormatter::for_tag(tag.as_deref());
        self.current_time = self.clock.now();
        self.carousel.reset();
        self.generation = self.generation.wrapping_add(1);
        self.timers = Some(ShowcaseTimers::start(self.intervals, self.generation, tx));
        self.mounted = true;

        tracing::info!(
            generation = self.generation,
            locale = tag.as_deref().unwrap_or("unset"),
            mode = ?self.locale_mode,
            "Showcase mounted"
        );
    }

    /// Release both timers. Safe to call when not mounted.
    pub fn unmount(&mut self) {
        if self.timers.take().is_some() {
            tracing::info!("Showcase unmounted");
        }
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Apply one timer tick. Ticks that arrive while unmounted, or that were
    /// queued by an earlier mount, are stale and dropped. Returns whether
    /// anything visible changed.
    pub fn on_tick(&mut self, kind: TimerKind, generation: u64) -> bool {
        if !self.mounted {
            tracing::trace!("Dropping {:?} tick, showcase not mounted", kind);
            return false;
        }
        if generation != self.generation {
            tracing::trace!(
                "Dropping {:?} tick from generation {}, current is {}",
                kind,
                generation,
                self.generation
            );
            return false;
        }

        match kind {
            TimerKind::Clock => {
                self.current_time = self.clock.now();
            }
            TimerKind::Carousel => {
                self.carousel.advance();
            }
        }
        true
    }

    pub fn next_slide(&mut self) -> usize {
        self.carousel.advance()
    }

    pub fn previous_slide(&mut self) -> usize {
        self.carousel.retreat()
    }

    pub fn jump_to_slide(&mut self, index: usize) -> Result<()> {
        self.carousel.jump_to(index)
    }

    pub fn time_text(&self) -> String {
        if !self.mounted {
            return TIME_PLACEHOLDER.to_string();
        }
        self.formatter.format_time(self.current_time.as_ref())
    }

    pub fn date_text(&self) -> String {
        if !self.mounted {
            return DATE_PLACEHOLDER.to_string();
        }
        self.formatter
            .format_date(self.current_time.as_ref(), self.locale_mode.is_uk())
    }

    /// Day grid for the current month, once a valid clock sample exists.
    pub fn calendar(&self) -> Option<Vec<CalendarCell>> {
        if !self.mounted {
            return None;
        }
        self.current_time
            .as_ref()
            .map(|now| build_month_grid(now.date_naive()))
    }

    pub fn active_index(&self) -> usize {
        self.carousel.current()
    }

    pub fn active_testimonial(&self) -> &Testimonial {
        &self.testimonials[self.carousel.current()]
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    #[cfg(test)]
    pub fn locale_mode(&self) -> LocaleMode {
        self.locale_mode
    }

    #[cfg(test)]
    pub fn timers(&self) -> Option<&ShowcaseTimers> {
        self.timers.as_ref()
    }
}

impl Drop for Showcase {
    fn drop(&mut self) {
        self.unmount();
    }
}
