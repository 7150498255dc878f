//! Lock screen: image grid, password field and attempt feedback

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use vislock_core::Phase;

use crate::app::{App, Focus};
use crate::ui::components::{grid::GridView, password};
use crate::ui::layout;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];
const PANEL_WIDTH: u16 = 60;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let widget = &app.widget;
    let config = widget.config();
    let show_instructions = config.display.show_instructions;

    let grid = GridView {
        items: config.visible_items(),
        size: config.display.size,
        selected: widget.selected(),
        cursor: (app.state.focus == Focus::Grid).then_some(app.state.cursor),
        disabled: widget.phase() == Phase::Checking,
    };
    let (_, grid_height) = grid.dimensions();

    let panel = Rect {
        x: area.x + area.width.saturating_sub(PANEL_WIDTH) / 2,
        width: area.width.min(PANEL_WIDTH),
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Description
            Constraint::Length(if show_instructions { 3 } else { 1 }),
            Constraint::Length(grid_height),
            Constraint::Length(1),
            Constraint::Length(3), // Password
            Constraint::Length(1), // Message
            Constraint::Length(1), // Submit hint
            Constraint::Length(if show_instructions { 2 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ])
        .split(panel);

    draw_title(frame, chunks[0], app);
    layout::render_centered(
        frame,
        chunks[1],
        config.description.clone(),
        app.theme.text_secondary(),
    );
    if show_instructions {
        draw_instructions(frame, chunks[2], app);
    }

    grid.render(frame, chunks[3], &app.theme);

    if !chunks[5].is_empty() {
        password::render(
            frame,
            chunks[5],
            &widget.masked_password(),
            app.state.focus == Focus::Password,
            widget.phase() == Phase::Checking,
            &app.theme,
        );
    }

    if let Some(message) = widget.last_message() {
        layout::render_centered(
            frame,
            chunks[6],
            format!("✗ {}", message),
            app.theme.danger(),
        );
    }

    draw_submit_hint(frame, chunks[7], app);

    if show_instructions {
        let index = config.correct_index + 1;
        let hint = format!(
            "Demo key: image #{}, password {}",
            index, config.expected_password
        );
        layout::render_centered(frame, chunks[8], hint, app.theme.text_muted());
    }

    layout::render_footer(
        frame,
        chunks[10],
        &[
            ("Tab", "Focus"),
            ("Enter", "Unlock"),
            ("Ctrl-R", "Reset"),
            ("Esc", "Quit"),
        ],
        &app.theme,
    );
    layout::render_clock(frame, area, &app.theme);
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let widget = &app.widget;
    let mut spans = vec![Span::styled(
        format!("🔒 {}", widget.config().title),
        app.theme.title(),
    )];

    if widget.attempts() > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {}/{} ", widget.attempts(), widget.config().max_attempts),
            app.theme.badge(),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_instructions(frame: &mut Frame, area: Rect, app: &App) {
    let remaining = app.widget.attempts_remaining();
    let noun = if remaining == 1 { "attempt" } else { "attempts" };

    let text = vec![
        Line::from(Span::styled(
            "Pick the correct image and enter the password",
            app.theme.text(),
        )),
        Line::from(Span::styled(
            format!("{} {} remaining", remaining, noun),
            app.theme.warning(),
        )),
    ];

    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_submit_hint(frame: &mut Frame, area: Rect, app: &App) {
    let widget = &app.widget;

    let (text, style) = match widget.phase() {
        Phase::Checking => {
            let frame_index = (app.tick as usize) % SPINNER.len();
            (
                format!("{} Checking...", SPINNER[frame_index]),
                app.theme.info(),
            )
        }
        Phase::Error => (
            "Pick an image or edit the password to retry".to_string(),
            app.theme.text_muted(),
        ),
        _ if widget.can_submit() => ("[Enter] Unlock".to_string(), app.theme.success()),
        _ => (
            "Select an image and enter the password".to_string(),
            app.theme.text_muted(),
        ),
    };

    layout::render_centered(frame, area, text, style);
}
