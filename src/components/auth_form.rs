//! Login / Register card
//!
//! One email and one password buffer are shared by both tabs; switching tabs
//! only changes the submit button and the action reported on submit.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::action::Action;
use crate::auth::{AuthAction, Credentials, IdentityProvider};
use crate::components::{Component, TextInput};
use crate::config::Theme;
use crate::input::focus::{FocusArea, FocusManager};
use crate::routes::Route;

pub const REQUIRED_FIELD_MESSAGE: &str = "Please fill in this field.";
pub const EMAIL_PLACEHOLDER: &str = "name@example.com";
pub const PASSWORD_PLACEHOLDER: &str = "••••••••";

const TAB_TITLES: [&str; 2] = ["Login", "Register"];

pub struct AuthForm {
    brand: String,
    tab: AuthAction,
    email: TextInput,
    password: TextInput,
    focus: FocusManager,
    /// Field that failed the required check on the last submit
    missing_field: Option<FocusArea>,
}

impl AuthForm {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            tab: AuthAction::default(),
            email: TextInput::new("Email", EMAIL_PLACEHOLDER),
            password: TextInput::new("Password", PASSWORD_PLACEHOLDER).masked(),
            focus: FocusManager::new(),
            missing_field: None,
        }
    }

    #[cfg(test)]
    pub fn tab(&self) -> AuthAction {
        self.tab
    }

    pub fn select_tab(&mut self, tab: AuthAction) {
        if self.tab != tab {
            tracing::debug!("Switched to {} tab", tab);
        }
        self.tab = tab;
    }

    #[cfg(test)]
    pub fn focused(&self) -> FocusArea {
        self.focus.current()
    }

    #[cfg(test)]
    pub fn email(&self) -> &str {
        self.email.value()
    }

    #[cfg(test)]
    pub fn password(&self) -> &str {
        self.password.value()
    }

    pub fn missing_field(&self) -> Option<FocusArea> {
        self.missing_field
    }

    pub fn submit_label(&self) -> &'static str {
        match self.tab {
            AuthAction::Login => "Unlock Your Learning",
            AuthAction::Register => "Start Your AI Learning Journey",
        }
    }

    /// Run the required-field check. On success returns what to hand to the
    /// submission hook; on failure focuses the first empty field and flags it.
    pub fn submission(&mut self) -> Option<(AuthAction, Credentials)> {
        let missing = if self.email.is_empty() {
            Some(FocusArea::Email)
        } else if self.password.is_empty() {
            Some(FocusArea::Password)
        } else {
            None
        };

        if let Some(field) = missing {
            self.missing_field = Some(field);
            self.focus.focus(field);
            return None;
        }

        self.missing_field = None;
        Some((
            self.tab,
            Credentials::new(self.email.value(), self.password.value()),
        ))
    }

    fn active_input(&mut self) -> Option<&mut TextInput> {
        match self.focus.current() {
            FocusArea::Email => Some(&mut self.email),
            FocusArea::Password => Some(&mut self.password),
            _ => None,
        }
    }

    fn activate(&self) -> Option<Action> {
        match self.focus.current() {
            FocusArea::Email | FocusArea::Password => Some(Action::FocusNext),
            FocusArea::Submit => Some(Action::Submit),
            FocusArea::GitHub => Some(Action::ProviderSignIn(IdentityProvider::GitHub)),
            FocusArea::Google => Some(Action::ProviderSignIn(IdentityProvider::Google)),
            FocusArea::Terms => Some(Action::Navigate(Route::Terms)),
            FocusArea::Privacy => Some(Action::Navigate(Route::Privacy)),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if let Some(input) = self.active_input() {
            if let Some(action) = input.handle_event(&Event::Key(key)) {
                self.missing_field = None;
                return Some(action);
            }
        }

        match (key.modifiers, key.code) {
            (_, KeyCode::Enter) => self.activate(),
            (KeyModifiers::NONE, KeyCode::Char(' ')) if !self.focus.current().is_text_field() => {
                self.activate()
            }
            (KeyModifiers::NONE, KeyCode::Left) if self.focus.is_focused(FocusArea::Submit) => {
                Some(Action::SelectTab(AuthAction::Login))
            }
            (KeyModifiers::NONE, KeyCode::Right) if self.focus.is_focused(FocusArea::Submit) => {
                Some(Action::SelectTab(AuthAction::Register))
            }
            (KeyModifiers::NONE, KeyCode::Up) => Some(Action::FocusPrev),
            (KeyModifiers::NONE, KeyCode::Down) => Some(Action::FocusNext),
            _ => None,
        }
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, label: &str, area_id: FocusArea, theme: &Theme) {
        let focused = self.focus.is_focused(area_id);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));
        let text = if focused {
            format!("{} {}", theme.focus.focus_indicator, label)
        } else {
            label.to_string()
        };
        let button = Paragraph::new(Span::styled(text, theme.button_style(focused)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(button, area);
    }

    fn render_field_error(&self, frame: &mut Frame, area: Rect, field: FocusArea, theme: &Theme) {
        if self.missing_field == Some(field) {
            let message = Paragraph::new(Span::styled(REQUIRED_FIELD_MESSAGE, theme.error_style()));
            frame.render_widget(message, area);
        }
    }

    fn render_legal_footer(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let line = Line::from(vec![
            Span::styled("By continuing, you agree to our ", theme.muted_style()),
            Span::styled(
                Route::Terms.title(),
                theme.link_style(self.focus.is_focused(FocusArea::Terms)),
            ),
            Span::styled(" and ", theme.muted_style()),
            Span::styled(
                Route::Privacy.title(),
                theme.link_style(self.focus.is_focused(FocusArea::Privacy)),
            ),
            Span::styled(".", theme.muted_style()),
        ]);
        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}

impl Component for AuthForm {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Paste(_) => {
                let action = self.active_input()?.handle_event(event);
                if action.is_some() {
                    self.missing_field = None;
                }
                action
            }
            _ => None,
        }
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::FocusNext => self.focus.next(),
            Action::FocusPrev => self.focus.prev(),
            Action::SelectTab(tab) => self.select_tab(*tab),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));
        let inner = card.inner(area);
        frame.render_widget(card, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // description
                Constraint::Length(1),
                Constraint::Length(1), // tabs
                Constraint::Length(1),
                Constraint::Length(3), // email
                Constraint::Length(1), // email error
                Constraint::Length(3), // password
                Constraint::Length(1), // password error
                Constraint::Length(3), // submit
                Constraint::Length(1),
                Constraint::Length(1), // separator
                Constraint::Length(3), // providers
                Constraint::Length(1),
                Constraint::Min(2),    // legal footer
            ])
            .margin(1)
            .split(inner);

        let title = Paragraph::new(Span::styled(
            format!("Welcome to {}", self.brand),
            theme.text_style().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, rows[0]);

        let description = Paragraph::new(Span::styled(
            "Sign in to your account or create a new one",
            theme.muted_style(),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(description, rows[1]);

        let selected = match self.tab {
            AuthAction::Login => 0,
            AuthAction::Register => 1,
        };
        let tabs = Tabs::new(TAB_TITLES)
            .select(selected)
            .style(theme.muted_style())
            .highlight_style(theme.button_style(true))
            .divider("|");
        frame.render_widget(tabs, rows[3]);

        self.email
            .render(frame, rows[5], self.focus.is_focused(FocusArea::Email), theme);
        self.render_field_error(frame, rows[6], FocusArea::Email, theme);
        self.password
            .render(frame, rows[7], self.focus.is_focused(FocusArea::Password), theme);
        self.render_field_error(frame, rows[8], FocusArea::Password, theme);

        self.render_button(frame, rows[9], self.submit_label(), FocusArea::Submit, theme);

        let separator = Paragraph::new(Span::styled("── OR CONTINUE WITH ──", theme.muted_style()))
            .alignment(Alignment::Center);
        frame.render_widget(separator, rows[11]);

        let providers = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[12]);
        self.render_button(
            frame,
            providers[0],
            IdentityProvider::GitHub.label(),
            FocusArea::GitHub,
            theme,
        );
        self.render_button(
            frame,
            providers[1],
            IdentityProvider::Google.label(),
            FocusArea::Google,
            theme,
        );

        self.render_legal_footer(frame, rows[14], theme);
    }
}
