pub mod auth_form;
pub mod legal_page;
pub mod showcase_panel;
pub mod text_input;

use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::config::Theme;

pub use auth_form::AuthForm;
pub use legal_page::LegalPage;
pub use text_input::TextInput;

pub trait Component {
    fn handle_event(&mut self, event: &Event) -> Option<Action>;

    fn update(&mut self, action: &Action);

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme);
}

/// Rendered buffer as one string per row, for assertions in tests.
#[cfg(test)]
pub(crate) fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
