//! Layout helpers for consistent screen structure

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Theme;

/// Create a fixed-size centered box, clamped to the available area
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Bordered dialog with a title
pub fn dialog_block<'a>(title: &'a str, title_style: Style, border_style: Style) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(title_style)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Render a single centered line of text
pub fn render_centered(frame: &mut Frame, area: Rect, text: impl Into<Text<'static>>, style: Style) {
    if area.is_empty() {
        return;
    }
    let widget = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// Render key hints as `[key] action` pairs
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    if area.is_empty() {
        return;
    }

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!("[{}]", key), theme.title()),
                Span::styled(format!(" {}  ", action), theme.text_muted()),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Render the wall clock in the bottom-right corner
pub fn render_clock(frame: &mut Frame, area: Rect, theme: &Theme) {
    let time = chrono::Local::now().format("%H:%M").to_string();
    let width = time.len() as u16 + 1;
    if area.width < width || area.height == 0 {
        return;
    }

    let clock_area = Rect::new(
        area.x + area.width - width,
        area.y + area.height - 1,
        width,
        1,
    );
    frame.render_widget(Paragraph::new(time).style(theme.text_muted()), clock_area);
}
