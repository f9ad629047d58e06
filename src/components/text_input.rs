use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::action::Action;
use crate::components::Component;
use crate::config::Theme;

const MASK_CHAR: char = '•';

/// Single-line labelled text field. Password fields render masked.
pub struct TextInput {
    label: String,
    placeholder: String,
    value: String,
    /// Cursor position in chars, not bytes
    cursor: usize,
    masked: bool,
}

impl TextInput {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            value: String::new(),
            cursor: 0,
            masked: false,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Paste text at the cursor. Line breaks are dropped.
    pub fn paste_text(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.insert_char(c);
        }
    }

    /// What the field shows: the value (masked if needed) or nothing.
    pub fn display_value(&self) -> String {
        if self.masked {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_pos(&self.value, self.cursor);
        self.value.insert(byte_pos, c);
        self.cursor += 1;
    }

    fn delete_char_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = char_to_byte_pos(&self.value, self.cursor - 1);
        let end = char_to_byte_pos(&self.value, self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    fn delete_char_at(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let start = char_to_byte_pos(&self.value, self.cursor);
        let end = char_to_byte_pos(&self.value, self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    fn move_to_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    fn delete_to_start(&mut self) {
        let end = char_to_byte_pos(&self.value, self.cursor);
        self.value.replace_range(..end, "");
        self.cursor = 0;
    }

    /// Editing keys are consumed with `Action::Redraw`. Everything else
    /// (Enter, Tab, Esc, shortcuts) bubbles up.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Backspace) => {
                self.delete_char_before();
                Some(Action::Redraw)
            }
            (_, KeyCode::Delete) => {
                self.delete_char_at();
                Some(Action::Redraw)
            }
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.move_left();
                Some(Action::Redraw)
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.move_right();
                Some(Action::Redraw)
            }
            (KeyModifiers::NONE, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
                self.cursor = 0;
                Some(Action::Redraw)
            }
            (KeyModifiers::NONE, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                self.move_to_end();
                Some(Action::Redraw)
            }
            // Ctrl+U: delete to start of field
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.delete_to_start();
                Some(Action::Redraw)
            }
            (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.insert_char(c);
                Some(Action::Redraw)
            }
            _ => None,
        }
    }
}

impl Component for TextInput {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Paste(text) => {
                self.paste_text(text);
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
            .title(Span::styled(format!(" {} ", self.label), theme.title_style(focused)));

        let line = if self.value.is_empty() {
            Line::from(Span::styled(self.placeholder.clone(), theme.muted_style()))
        } else {
            Line::from(Span::styled(self.display_value(), theme.text_style()))
        };

        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(line).block(block), area);

        if focused && inner.width > 0 && inner.height > 0 {
            let offset = (self.cursor as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
        }
    }
}

/// Convert a character index to a byte index in a string
fn char_to_byte_pos(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
