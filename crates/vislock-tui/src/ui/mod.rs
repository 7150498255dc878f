//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;
use vislock_core::Phase;

use crate::app::App;

/// Main render function - delegates to the screen for the current phase
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(
        ratatui::widgets::Block::default().style(app.theme.background()),
        area,
    );

    match app.widget.phase() {
        Phase::Success => screens::success::draw(frame, area, app),
        Phase::Locked => screens::lockout::draw(frame, area, app),
        Phase::Idle | Phase::Checking | Phase::Error => screens::lock::draw(frame, area, app),
    }

    app.state.notifications.render(frame, area, &app.theme);
}
