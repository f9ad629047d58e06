use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub focus: FocusStyle,
    pub calendar: CalendarStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "indigo".to_string(),
            colors: ThemeColors::default(),
            focus: FocusStyle::default(),
            calendar: CalendarStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub background: HexColor,
    pub foreground: HexColor,
    pub primary: HexColor,
    pub accent: HexColor,
    pub muted: HexColor,
    pub error: HexColor,
    pub highlight: HexColor,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: HexColor::new("#1e1b4b"),
            foreground: HexColor::new("#e0e7ff"),
            primary: HexColor::new("#7c3aed"),
            accent: HexColor::new("#c4b5fd"),
            muted: HexColor::new("#8b8fb8"),
            error: HexColor::new("#f87171"),
            highlight: HexColor::new("#fbbf24"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusStyle {
    pub focused_border: HexColor,
    pub unfocused_border: HexColor,
    pub focused_title: HexColor,
    pub unfocused_title: HexColor,
    pub use_bold_focused: bool,
    pub focus_indicator: String,
}

impl Default for FocusStyle {
    fn default() -> Self {
        Self {
            focused_border: HexColor::new("#a78bfa"),
            unfocused_border: HexColor::new("#4338ca"),
            focused_title: HexColor::new("#ede9fe"),
            unfocused_title: HexColor::new("#8b8fb8"),
            use_bold_focused: true,
            focus_indicator: "▶".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarStyle {
    pub header_fg: HexColor,
    pub day_fg: HexColor,
    pub today_fg: HexColor,
    pub today_bg: HexColor,
}

impl Default for CalendarStyle {
    fn default() -> Self {
        Self {
            header_fg: HexColor::new("#a5b4fc"),
            day_fg: HexColor::new("#c7d2fe"),
            today_fg: HexColor::new("#1e1b4b"),
            today_bg: HexColor::new("#c4b5fd"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn new(hex: &str) -> Self {
        Self(hex.to_string())
    }

    pub fn to_color(&self) -> Color {
        self.parse_hex().unwrap_or(Color::Reset)
    }

    fn parse_hex(&self) -> Option<Color> {
        let hex = self.0.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color::Rgb(r, g, b))
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self("#ffffff".to_string())
    }
}

impl Theme {
    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.focus.focused_border.to_color()
        } else {
            self.focus.unfocused_border.to_color()
        };

        let mut style = Style::default().fg(color);
        if focused && self.focus.use_bold_focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    pub fn title_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.focus.focused_title.to_color()
        } else {
            self.focus.unfocused_title.to_color()
        };

        let mut style = Style::default().fg(color);
        if focused && self.focus.use_bold_focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Filled button when focused, outlined text otherwise.
    pub fn button_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.colors.foreground.to_color())
                .bg(self.colors.primary.to_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.accent.to_color())
        }
    }

    pub fn link_style(&self, focused: bool) -> Style {
        let style = Style::default()
            .fg(self.colors.accent.to_color())
            .add_modifier(Modifier::UNDERLINED);
        if focused {
            style
                .fg(self.colors.highlight.to_color())
                .add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.colors.foreground.to_color())
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.colors.muted.to_color())
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.colors.error.to_color())
    }

    pub fn today_style(&self) -> Style {
        Style::default()
            .fg(self.calendar.today_fg.to_color())
            .bg(self.calendar.today_bg.to_color())
            .add_modifier(Modifier::BOLD)
    }
}
