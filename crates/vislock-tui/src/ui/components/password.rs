//! Password input field

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::ui::Theme;

const PLACEHOLDER: &str = "Enter the password";

/// Keep the tail of `text` that fits in `width` columns
pub fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();

    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }

    &text[start..]
}

/// Render the password field
pub fn render(
    frame: &mut Frame,
    area: Rect,
    masked: &str,
    focused: bool,
    disabled: bool,
    theme: &Theme,
) {
    let border_style = if focused {
        theme.border_focused()
    } else {
        theme.border()
    };

    let block = Block::default()
        .title(" Password ")
        .title_style(theme.text_secondary())
        .title_bottom(Line::from(" [F2] show/hide ").right_aligned())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_width = area.width.saturating_sub(3) as usize;

    let line = if masked.is_empty() && !focused {
        Line::from(Span::styled(PLACEHOLDER, theme.text_muted()))
    } else {
        let mut spans = vec![Span::raw(visible_tail(masked, inner_width).to_string())];
        if focused && !disabled {
            spans.push(Span::styled("▏", theme.title()));
        }
        Line::from(spans)
    };

    let mut style = theme.input(focused);
    if disabled {
        style = style.add_modifier(Modifier::DIM);
    }

    let field = Paragraph::new(line).style(style).block(block);
    frame.render_widget(field, area);
}
