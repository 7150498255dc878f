//! Lockout screen shown once the attempt limit is reached

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::App;
use crate::ui::layout;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let dialog = layout::centered_rect_fixed(50, 10, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(app.theme.danger());
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let max = app.widget.config().max_attempts;
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("⚠  LOCKED  ⚠", app.theme.danger())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Maximum attempts exceeded ({})", max),
            app.theme.text(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Reset the lock to start over",
            app.theme.text_muted(),
        )),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);

    let footer = Rect {
        y: dialog.bottom().min(area.bottom().saturating_sub(1)),
        height: 1,
        ..area
    }
    .intersection(area);
    layout::render_footer(frame, footer, &[("R", "Reset"), ("Q", "Quit")], &app.theme);
}
