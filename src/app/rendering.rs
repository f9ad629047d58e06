// Rendering - draw() method and layout helpers

use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    widgets::Block,
};

use super::{App, SHOWCASE_MIN_WIDTH};
use crate::components::Component;
use crate::error::Result;
use crate::routes::Route;

const CARD_MAX_WIDTH: u16 = 72;
const CARD_MAX_HEIGHT: u16 = 32;

impl<B: Backend> App<B> {
    pub(super) fn draw(&mut self) -> Result<()> {
        let route = self.route;
        let showcase = &self.showcase;
        let showcase_panel = &self.showcase_panel;
        let form = &self.form;
        let legal_page = self.legal_page.as_ref();
        let theme = &self.theme;

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(
                Block::default().style(Style::default().bg(theme.colors.background.to_color())),
                area,
            );

            match (route, legal_page) {
                (Route::Auth, _) | (_, None) => {
                    let card_area = if area.width >= SHOWCASE_MIN_WIDTH {
                        let halves = Layout::default()
                            .direction(Direction::Horizontal)
                            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                            .split(area);
                        showcase_panel.render(frame, halves[0], showcase, theme);
                        halves[1]
                    } else {
                        area
                    };
                    form.render(frame, centered(card_area, CARD_MAX_WIDTH, CARD_MAX_HEIGHT), true, theme);
                }
                (_, Some(page)) => {
                    page.render(frame, centered(area, CARD_MAX_WIDTH + 8, area.height), true, theme);
                }
            }
        })?;

        self.needs_redraw = false;
        Ok(())
    }
}

/// Center a box of at most `width` x `height` inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
