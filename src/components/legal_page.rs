use crossterm::event::{Event, KeyCode};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::action::Action;
use crate::components::Component;
use crate::config::Theme;
use crate::routes::Route;

const TERMS_BODY: &[&str] = &[
    "By creating an account or signing in you agree to use the service for personal learning and in line with applicable law.",
    "Content generated for you is provided as-is. Do not rely on it as professional advice.",
    "Accounts are personal. Keep your password to yourself and tell us if you suspect misuse.",
    "We may update these terms. Continued use after a change means you accept the updated terms.",
];

const PRIVACY_BODY: &[&str] = &[
    "We collect the email address you sign up with and the learning activity needed to personalise your paths.",
    "We do not sell personal data. Data is shared only with processors that help us run the service.",
    "You can ask for a copy of your data or for its deletion at any time through Support.",
];

/// Static Terms of Service / Privacy Policy screen. Esc returns to sign in.
pub struct LegalPage {
    route: Route,
    scroll: u16,
}

impl LegalPage {
    pub fn new(route: Route) -> Self {
        Self { route, scroll: 0 }
    }

    #[cfg(test)]
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn body(&self) -> &'static [&'static str] {
        match self.route {
            Route::Privacy => PRIVACY_BODY,
            _ => TERMS_BODY,
        }
    }
}

impl Component for LegalPage {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        let Event::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Navigate(Route::Auth)),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                Some(Action::Redraw)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Some(Action::Redraw)
            }
            _ => None,
        }
    }

    fn update(&mut self, _action: &Action) {}

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused))
            .title(Span::styled(
                format!(" {} ", self.route.title()),
                theme.title_style(focused),
            ))
            .title_bottom(Line::from(Span::styled(" Esc: back ", theme.muted_style())).right_aligned())
            .padding(Padding::uniform(1));

        let mut lines = vec![
            Line::from(Span::styled(
                self.route.title(),
                theme.text_style().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::default(),
        ];
        for (i, paragraph) in self.body().iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("{}. {}", i + 1, paragraph),
                theme.text_style(),
            )));
            lines.push(Line::default());
        }

        let page = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0));
        frame.render_widget(page, area);
    }
}
