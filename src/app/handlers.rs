// Key mapping and action dispatch

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;

use super::App;
use crate::action::Action;
use crate::auth::AuthAction;
use crate::components::Component;
use crate::routes::Route;

impl<B: Backend> App<B> {
    pub(super) fn handle_input(&mut self, event: CrosstermEvent) -> Option<Action> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            CrosstermEvent::Paste(text) => match self.route {
                Route::Auth => self.form.handle_event(&CrosstermEvent::Paste(text)),
                _ => None,
            },
            CrosstermEvent::Resize(_, _) => Some(Action::Redraw),
            _ => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        #[cfg(debug_assertions)]
        tracing::trace!("Key event: {:?}, route: {}", key, self.route.path());

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match self.route {
            Route::Auth => self.handle_auth_key(key),
            Route::Terms | Route::Privacy => self
                .legal_page
                .as_mut()?
                .handle_event(&CrosstermEvent::Key(key)),
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent) -> Option<Action> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => Some(Action::Quit),
            (_, KeyCode::BackTab) => Some(Action::FocusPrev),
            (KeyModifiers::NONE, KeyCode::Tab) => Some(Action::FocusNext),
            (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(Action::SelectTab(AuthAction::Login)),
            (KeyModifiers::CONTROL, KeyCode::Char('r')) => {
                Some(Action::SelectTab(AuthAction::Register))
            }
            (_, KeyCode::PageDown) => Some(Action::CarouselNext),
            (_, KeyCode::PageUp) => Some(Action::CarouselPrev),
            (KeyModifiers::ALT, KeyCode::Char(c @ '1'..='9')) => {
                Some(Action::CarouselJump(c as usize - '1' as usize))
            }
            _ => self.form.handle_event(&CrosstermEvent::Key(key)),
        }
    }

    pub(super) fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            Action::Tick(kind, generation) => {
                if self.showcase.on_tick(kind, generation) {
                    self.mark_dirty();
                }
            }
            Action::FocusNext | Action::FocusPrev | Action::SelectTab(_) => {
                self.form.update(&action);
                self.mark_dirty();
            }
            Action::Submit => {
                if let Some((auth_action, credentials)) = self.form.submission() {
                    self.auth_handler.submit(auth_action, &credentials);
                } else {
                    tracing::debug!("Submit blocked, {:?} is empty", self.form.missing_field());
                }
                self.mark_dirty();
            }
            Action::ProviderSignIn(provider) => {
                tracing::debug!("{} sign-in is not wired up", provider.label());
            }
            Action::Navigate(route) => self.navigate(route),
            Action::CarouselNext => {
                self.showcase.next_slide();
                self.mark_dirty();
            }
            Action::CarouselPrev => {
                self.showcase.previous_slide();
                self.mark_dirty();
            }
            Action::CarouselJump(index) => match self.showcase.jump_to_slide(index) {
                Ok(()) => self.mark_dirty(),
                Err(e) => tracing::debug!("Ignoring carousel jump: {}", e),
            },
            Action::Redraw => self.mark_dirty(),
        }
    }
}
