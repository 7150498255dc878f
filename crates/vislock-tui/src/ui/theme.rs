//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};
use vislock_core::ThemeMode;

/// Lock color palette
pub struct Theme {
    // Surface
    pub background: Color,
    pub surface: Color,
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,

    /// Tile colors for items that carry no colour of their own
    pub tiles: [Color; 6],
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Palette for a configured theme mode
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250), // #FAFAFA
            surface: Color::Rgb(255, 255, 255),
            accent: Color::Rgb(63, 81, 181), // #3F51B5 - Indigo

            success: Color::Rgb(46, 125, 50), // #2E7D32
            warning: Color::Rgb(239, 108, 0), // #EF6C00
            danger: Color::Rgb(198, 40, 40),  // #C62828
            info: Color::Rgb(21, 101, 192),   // #1565C0

            border: Color::Rgb(189, 189, 189),         // #BDBDBD
            border_focused: Color::Rgb(63, 81, 181),   // #3F51B5
            text_primary: Color::Rgb(33, 33, 33),      // #212121
            text_secondary: Color::Rgb(97, 97, 97),    // #616161
            text_muted: Color::Rgb(158, 158, 158),     // #9E9E9E
            selection: Color::Rgb(232, 234, 246),      // #E8EAF6

            tiles: [
                Color::Rgb(102, 126, 234),
                Color::Rgb(240, 147, 251),
                Color::Rgb(79, 172, 254),
                Color::Rgb(67, 233, 123),
                Color::Rgb(250, 112, 154),
                Color::Rgb(161, 140, 209),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39), // #111827
            surface: Color::Rgb(31, 41, 55),    // #1F2937
            accent: Color::Rgb(129, 140, 248),  // #818CF8

            success: Color::Rgb(76, 175, 80), // #4CAF50
            warning: Color::Rgb(255, 152, 0), // #FF9800
            danger: Color::Rgb(244, 67, 54),  // #F44336
            info: Color::Rgb(33, 150, 243),   // #2196F3

            border: Color::Rgb(55, 65, 81),            // #374151
            border_focused: Color::Rgb(129, 140, 248), // #818CF8
            text_primary: Color::Rgb(243, 244, 246),   // #F3F4F6
            text_secondary: Color::Rgb(209, 213, 219), // #D1D5DB
            text_muted: Color::Rgb(107, 114, 128),     // #6B7280
            selection: Color::Rgb(55, 65, 81),         // #374151

            ..Self::light()
        }
    }

    /// Screen background
    pub fn background(&self) -> Style {
        Style::default().bg(self.background).fg(self.text_primary)
    }

    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Attempt counter badge
    pub fn badge(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get input field style
    pub fn input(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.text_primary).bg(self.selection)
        } else {
            Style::default().fg(self.text_secondary).bg(self.surface)
        }
    }

    /// Fill colour for a grid tile
    pub fn tile(&self, accent: Option<[u8; 3]>, index: usize) -> Color {
        match accent {
            Some([r, g, b]) => Color::Rgb(r, g, b),
            None => self.tiles[index % self.tiles.len()],
        }
    }
}
