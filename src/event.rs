use crossterm::event::Event as CrosstermEvent;

/// Everything the app loop reacts to, one at a time.
#[derive(Debug, Clone)]
pub enum Event {
    /// Input from crossterm (keyboard, paste, resize)
    Input(CrosstermEvent),
    /// A periodic timer fired. Carries the mount generation that started it.
    Timer(TimerKind, u64),
}

/// Which showcase timer produced a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Refreshes the displayed time (1 s by default)
    Clock,
    /// Advances the testimonial carousel (8 s by default)
    Carousel,
}
