// App module - split into submodules
// - mod.rs: App struct, constructor, mount bookkeeping
// - event_loop.rs: async run() loop over terminal input and timer ticks
// - rendering.rs: screen layout (draw method)
// - handlers.rs: key mapping and action dispatch

mod event_loop;
mod handlers;
mod rendering;

use std::sync::Arc;

use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

use crate::auth::{AuthHandler, LoggingAuthHandler};
use crate::clock::Clock;
use crate::components::showcase_panel::ShowcasePanel;
use crate::components::{AuthForm, LegalPage};
use crate::config::{AppConfig, Theme};
use crate::error::Result;
use crate::event::Event;
use crate::locale::LocaleProvider;
use crate::routes::Route;
use crate::showcase::Showcase;

/// Below this width the showcase half is hidden and only the card is drawn.
pub(super) const SHOWCASE_MIN_WIDTH: u16 = 100;

pub struct App<B: Backend> {
    terminal: Terminal<B>,
    should_quit: bool,
    needs_redraw: bool,
    route: Route,
    showcase: Showcase,
    showcase_panel: ShowcasePanel,
    form: AuthForm,
    legal_page: Option<LegalPage>,
    auth_handler: Box<dyn AuthHandler>,
    theme: Theme,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
}

impl<B: Backend> App<B> {
    /// Fails with `EmptyCarousel` if the configured testimonial list is empty.
    pub fn new(
        terminal: Terminal<B>,
        config: &AppConfig,
        theme: Theme,
        clock: Arc<dyn Clock>,
        locale: Arc<dyn LocaleProvider>,
    ) -> Result<Self> {
        let showcase = Showcase::new(
            clock,
            locale,
            config.testimonials.clone(),
            config.showcase.intervals(),
        )?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            should_quit: false,
            needs_redraw: true,
            route: Route::Auth,
            showcase,
            showcase_panel: ShowcasePanel::new(
                config.showcase.brand.clone(),
                config.showcase.version_label.clone(),
            ),
            form: AuthForm::new(config.showcase.brand.clone()),
            legal_page: None,
            auth_handler: Box::new(LoggingAuthHandler),
            theme,
            event_tx,
            event_rx,
        })
    }

    /// Replace the default logging submission hook.
    #[cfg(test)]
    pub fn with_auth_handler(mut self, handler: Box<dyn AuthHandler>) -> Self {
        self.auth_handler = handler;
        self
    }

    #[cfg(test)]
    pub fn route(&self) -> Route {
        self.route
    }

    #[cfg(test)]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub fn showcase(&self) -> &Showcase {
        &self.showcase
    }

    #[cfg(test)]
    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    #[cfg(test)]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(super) fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Mount the showcase once the auth screen has been painted. Returns
    /// whether a mount happened (and a redraw is due).
    pub(super) fn sync_mount(&mut self) -> bool {
        if self.route != Route::Auth || self.showcase.is_mounted() {
            return false;
        }
        self.showcase.mount(&self.event_tx);
        self.mark_dirty();
        true
    }

    pub(super) fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::info!(from = self.route.path(), to = route.path(), "Navigate");

        if self.route == Route::Auth {
            self.showcase.unmount();
        }
        self.legal_page = match route {
            Route::Auth => None,
            other => Some(LegalPage::new(other)),
        };
        self.route = route;
        self.mark_dirty();
    }
}

impl<B: Backend> Drop for App<B> {
    fn drop(&mut self) {
        self.showcase.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::auth::{AuthAction, Credentials};
    use crate::components::buffer_lines;
    use crate::event::TimerKind;
    use crate::input::focus::FocusArea;
    use crate::locale::FixedLocale;
    use chrono::{DateTime, FixedOffset, NaiveTime};
    use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Advances one second per call to `now()`.
    struct SteppingClock {
        start: DateTime<FixedOffset>,
        calls: AtomicI64,
    }

    impl SteppingClock {
        fn new(raw: &str) -> Self {
            Self {
                start: DateTime::parse_from_rfc3339(raw).unwrap(),
                calls: AtomicI64::new(0),
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> Option<DateTime<FixedOffset>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Some(self.start + chrono::Duration::seconds(n))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingHandler(Arc<Mutex<Vec<(AuthAction, Credentials)>>>);

    impl AuthHandler for RecordingHandler {
        fn submit(&mut self, action: AuthAction, credentials: &Credentials) {
            self.0.lock().unwrap().push((action, credentials.clone()));
        }
    }

    fn app_with(locale: &str, width: u16) -> App<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(width, 36)).unwrap();
        App::new(
            terminal,
            &AppConfig::default(),
            Theme::default(),
            Arc::new(SteppingClock::new("2024-06-03T09:05:07+01:00")),
            Arc::new(FixedLocale::new(locale)),
        )
        .unwrap()
    }

    fn screen(app: &App<TestBackend>) -> String {
        buffer_lines(app.terminal().backend().buffer()).join("\n")
    }

    fn key(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_str(app: &mut App<TestBackend>, text: &str) {
        for c in text.chars() {
            app.apply(Event::Input(key(KeyCode::Char(c))));
        }
    }

    /// Pull the next timer tick and apply it.
    async fn pump(app: &mut App<TestBackend>) -> TimerKind {
        match app.event_rx.recv().await {
            Some(Event::Timer(kind, generation)) => {
                app.apply(Event::Timer(kind, generation));
                kind
            }
            other => panic!("expected a timer tick, got {:?}", other),
        }
    }

    fn displayed_time(app: &App<TestBackend>) -> String {
        app.showcase().time_text()
    }

    #[test]
    fn test_empty_testimonials_rejected_at_startup() {
        let mut config = AppConfig::default();
        config.testimonials.clear();
        let result = App::new(
            Terminal::new(TestBackend::new(120, 36)).unwrap(),
            &config,
            Theme::default(),
            Arc::new(SteppingClock::new("2024-06-03T09:05:07Z")),
            Arc::new(FixedLocale::unset()),
        );
        assert!(matches!(result, Err(crate::error::AuthScreenError::EmptyCarousel)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_paint_shows_placeholders_then_mounts() {
        let mut app = app_with("en-GB", 120);
        app.draw().unwrap();
        let first = screen(&app);
        assert!(first.contains("Time"));
        assert!(first.contains("Date"));
        assert!(!first.contains("AM"));
        assert!(!app.showcase().is_mounted());

        assert!(app.sync_mount());
        app.draw().unwrap();
        let second = screen(&app);
        assert!(second.contains("09:05:07 AM"));
        assert!(second.contains("Monday 3 June 2024"));
        assert!(!app.sync_mount());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeline_clock_and_carousel() {
        let mut app = app_with("en-US", 120);
        app.draw().unwrap();
        app.sync_mount();
        assert_eq!(app.showcase().active_index(), 0);

        let mut seen = Vec::new();
        let mut clock_ticks = 0;
        while app.showcase().active_index() == 0 {
            match pump(&mut app).await {
                TimerKind::Clock => {
                    clock_ticks += 1;
                    let text = displayed_time(&app);
                    assert_eq!(text.len(), 11);
                    assert!(NaiveTime::parse_from_str(&text, "%I:%M:%S %p").is_ok());
                    seen.push(text);
                }
                TimerKind::Carousel => {}
            }
        }
        assert!(clock_ticks >= 7);
        assert_eq!(app.showcase().active_index(), 1);
        // The clock moved forward on every tick
        let mut deduped = seen.clone();
        deduped.dedup();
        assert_eq!(deduped, seen);

        app.draw().unwrap();
        assert!(screen(&app).contains("- Mark Johnson, Software Engineer"));
        assert!(screen(&app).contains("Monday, June 3, 2024"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigate_away_unmounts_and_drops_stale_ticks() {
        let mut app = app_with("en-GB", 120);
        app.draw().unwrap();
        app.sync_mount();

        tokio::time::sleep(Duration::from_millis(8500)).await;
        app.apply(Event::Input(key(KeyCode::PageDown)));
        assert_eq!(app.showcase().active_index(), 1);

        app.dispatch(Action::Navigate(Route::Terms));
        assert_eq!(app.route(), Route::Terms);
        assert!(!app.showcase().is_mounted());
        assert!(app.showcase().timers().is_none());

        // Ticks queued before teardown are still in the channel
        let before = (displayed_time(&app), app.showcase().active_index());
        while let Ok(event) = app.event_rx.try_recv() {
            app.apply(event);
        }
        assert_eq!((displayed_time(&app), app.showcase().active_index()), before);

        app.draw().unwrap();
        assert!(screen(&app).contains("Terms of Service"));

        app.apply(Event::Input(key(KeyCode::Esc)));
        assert_eq!(app.route(), Route::Auth);
        assert!(!app.should_quit());
        assert!(app.sync_mount());
        assert_eq!(app.showcase().active_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_return_does_not_replay_old_ticks() {
        let mut app = app_with("en-GB", 120);
        app.draw().unwrap();
        app.sync_mount();

        // Eight clock ticks and one carousel tick pile up unread
        tokio::time::sleep(Duration::from_millis(8500)).await;

        app.dispatch(Action::Navigate(Route::Terms));
        app.apply(Event::Input(key(KeyCode::Esc)));
        assert_eq!(app.route(), Route::Auth);
        assert!(app.sync_mount());
        let time_after_mount = displayed_time(&app);

        let mut drained = 0;
        while let Ok(event) = app.event_rx.try_recv() {
            app.apply(event);
            drained += 1;
        }
        assert!(drained >= 9, "drained {} events", drained);
        assert_eq!(app.showcase().active_index(), 0);
        assert_eq!(displayed_time(&app), time_after_mount);

        // The new mount's own ticks still land
        assert_eq!(pump(&mut app).await, TimerKind::Clock);
        assert_ne!(displayed_time(&app), time_after_mount);
    }

    #[tokio::test]
    async fn test_alt_digit_jumps_to_slide() {
        let mut app = app_with("en-GB", 120);
        app.apply(Event::Input(CrosstermEvent::Key(KeyEvent::new(
            KeyCode::Char('3'),
            KeyModifiers::ALT,
        ))));
        assert_eq!(app.showcase().active_index(), 2);
        assert_eq!(app.form().email(), "");

        // Out of range leaves the slide alone
        app.apply(Event::Input(CrosstermEvent::Key(KeyEvent::new(
            KeyCode::Char('9'),
            KeyModifiers::ALT,
        ))));
        assert_eq!(app.showcase().active_index(), 2);
    }

    #[tokio::test]
    async fn test_submit_reaches_handler() {
        let handler = RecordingHandler::default();
        let mut app = app_with("en-GB", 120).with_auth_handler(Box::new(handler.clone()));

        // Empty submit never reaches the hook
        app.apply(Event::Input(key(KeyCode::Tab)));
        app.apply(Event::Input(key(KeyCode::Tab)));
        assert_eq!(app.form().focused(), FocusArea::Submit);
        app.apply(Event::Input(key(KeyCode::Enter)));
        assert!(handler.0.lock().unwrap().is_empty());
        assert_eq!(app.form().focused(), FocusArea::Email);

        type_str(&mut app, "me@example.com");
        app.apply(Event::Input(key(KeyCode::Tab)));
        type_str(&mut app, "s3cret");
        app.apply(Event::Input(ctrl('r')));
        app.apply(Event::Input(key(KeyCode::Enter)));
        assert_eq!(app.form().focused(), FocusArea::Submit);
        app.apply(Event::Input(key(KeyCode::Enter)));

        let calls = handler.0.lock().unwrap();
        assert_eq!(
            *calls,
            vec![(AuthAction::Register, Credentials::new("me@example.com", "s3cret"))]
        );
    }

    #[tokio::test]
    async fn test_narrow_terminal_hides_showcase() {
        let mut app = app_with("en-GB", 70);
        app.draw().unwrap();
        let text = screen(&app);
        assert!(text.contains("Welcome to EduClipsAI"));
        assert!(!text.contains("TIME"));
    }

    #[tokio::test]
    async fn test_escape_and_ctrl_c_quit_from_auth() {
        let mut app = app_with("en-GB", 120);
        app.apply(Event::Input(key(KeyCode::Esc)));
        assert!(app.should_quit());

        let mut app = app_with("en-GB", 120);
        app.dispatch(Action::Navigate(Route::Privacy));
        app.apply(Event::Input(ctrl('c')));
        assert!(app.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_unmounts_on_exit() {
        let mut app = app_with("en-GB", 120);
        let input = futures::stream::iter(vec![
            Ok(key(KeyCode::Char('a'))),
            Ok(key(KeyCode::Esc)),
        ]);
        app.run_with(input).await.unwrap();

        assert!(app.should_quit());
        assert!(!app.showcase().is_mounted());
        assert_eq!(app.form().email(), "a");
        assert!(screen(&app).contains("09:05:07 AM"));
    }
}
