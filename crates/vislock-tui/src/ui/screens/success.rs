//! Unlocked screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::layout;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let dialog = layout::centered_rect_fixed(44, 9, area);
    let block = layout::dialog_block(
        &app.widget.config().title,
        app.theme.title(),
        app.theme.success(),
    );
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let attempts = app.widget.attempts();
    let detail = match attempts {
        0 => "Opened on the first try".to_string(),
        1 => "Opened after 1 failed attempt".to_string(),
        n => format!("Opened after {} failed attempts", n),
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("✓ Verified", app.theme.success())),
        Line::from(""),
        Line::from(Span::styled("The visual lock is open", app.theme.text())),
        Line::from(Span::styled(detail, app.theme.text_muted())),
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
