//! Left half of the screen: brand header with the clock, the testimonial
//! card, and a footer with version, calendar and date.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::config::Theme;
use crate::formatter::{CalendarCell, WEEKDAY_HEADER};
use crate::showcase::Showcase;

const CELL_WIDTH: usize = 3;

pub struct ShowcasePanel {
    brand: String,
    version_label: String,
}

impl ShowcasePanel {
    pub fn new(brand: impl Into<String>, version_label: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            version_label: version_label.into(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, showcase: &Showcase, theme: &Theme) {
        let panel = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false))
            .style(Style::default().bg(theme.colors.background.to_color()));
        let inner = panel.inner(area);
        frame.render_widget(panel, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(1), // separator
                Constraint::Min(6),    // carousel
                Constraint::Length(1), // separator
                Constraint::Length(8), // footer
            ])
            .horizontal_margin(1)
            .split(inner);

        self.render_header(frame, rows[0], showcase, theme);
        render_separator(frame, rows[1], theme);
        render_testimonial(frame, rows[2], showcase, theme);
        render_separator(frame, rows[3], theme);
        self.render_footer(frame, rows[4], showcase, theme);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, showcase: &Showcase, theme: &Theme) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(14)])
            .split(area);

        let brand = Line::from(vec![
            Span::styled(
                self.brand.clone(),
                theme.text_style().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("[Docs]", theme.button_style(false)),
            Span::raw(" "),
            Span::styled("[Support]", theme.button_style(false)),
        ]);
        frame.render_widget(Paragraph::new(brand), cols[0]);

        let time = Paragraph::new(vec![
            label_line("TIME", theme),
            Line::from(Span::styled(showcase.time_text(), theme.text_style())),
        ])
        .alignment(Alignment::Right);
        frame.render_widget(time, cols[1]);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, showcase: &Showcase, theme: &Theme) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(10),
                Constraint::Length((CELL_WIDTH * 7) as u16 + 2),
                Constraint::Min(12),
            ])
            .split(area);

        let version = Paragraph::new(vec![
            label_line("VERSION", theme),
            Line::from(Span::styled(self.version_label.clone(), theme.text_style())),
        ]);
        frame.render_widget(version, cols[0]);

        let mut calendar = vec![label_line("CALENDAR", theme).centered()];
        calendar.extend(calendar_lines(showcase.calendar().as_deref(), theme));
        frame.render_widget(Paragraph::new(calendar), cols[1]);

        let date = Paragraph::new(vec![
            label_line("DATE", theme),
            Line::from(Span::styled(showcase.date_text(), theme.text_style())),
        ])
        .alignment(Alignment::Right)
        .wrap(Wrap { trim: true });
        frame.render_widget(date, cols[2]);
    }
}

fn label_line(label: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        label,
        theme.muted_style().add_modifier(Modifier::BOLD),
    ))
}

fn render_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rule = "─".repeat(area.width as usize);
    frame.render_widget(Paragraph::new(Span::styled(rule, theme.muted_style())), area);
}

fn render_testimonial(frame: &mut Frame, area: Rect, showcase: &Showcase, theme: &Theme) {
    let testimonial = showcase.active_testimonial();
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
        .padding(Padding::horizontal(1));

    let dots: Vec<Span> = (0..showcase.testimonials().len())
        .map(|i| {
            if i == showcase.active_index() {
                Span::styled("● ", Style::default().fg(theme.colors.accent.to_color()))
            } else {
                Span::styled("○ ", theme.muted_style())
            }
        })
        .collect();

    let text = vec![
        Line::from(Span::styled(
            format!("\"{}\"", testimonial.quote),
            theme.text_style().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(Span::styled(testimonial.attribution(), theme.muted_style())),
        Line::default(),
        Line::from(dots),
    ];

    let paragraph = Paragraph::new(text)
        .block(card)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Weekday header plus one line per week. Without a grid only the header is
/// drawn.
pub fn calendar_lines(cells: Option<&[CalendarCell]>, theme: &Theme) -> Vec<Line<'static>> {
    let header_style = Style::default().fg(theme.calendar.header_fg.to_color());
    let day_style = Style::default().fg(theme.calendar.day_fg.to_color());

    let header: String = WEEKDAY_HEADER
        .iter()
        .map(|d| format!("{:<width$}", d, width = CELL_WIDTH))
        .collect();
    let mut lines = vec![Line::from(Span::styled(header, header_style))];

    let Some(cells) = cells else {
        return lines;
    };

    for week in cells.chunks(7) {
        let spans: Vec<Span<'static>> = week
            .iter()
            .map(|cell| match cell {
                CalendarCell::Blank => Span::raw(" ".repeat(CELL_WIDTH)),
                CalendarCell::Day { day, is_today } => {
                    let text = format!("{:>2}", day);
                    let style = if *is_today { theme.today_style() } else { day_style };
                    Span::styled(text, style)
                }
            })
            .flat_map(|span| {
                let pad = CELL_WIDTH.saturating_sub(span.content.chars().count());
                [span, Span::raw(" ".repeat(pad))]
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines
}
