//! Image grid component

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use vislock_core::{ImageRef, SizeClass};

use crate::ui::Theme;

/// What the grid needs to know about the session
pub struct GridView<'a> {
    pub items: &'a [ImageRef],
    pub size: SizeClass,
    pub selected: Option<usize>,
    /// Cursor position, shown only when the grid has focus
    pub cursor: Option<usize>,
    /// Dim and ignore the grid while a verification runs
    pub disabled: bool,
}

impl GridView<'_> {
    /// Rows needed for the items
    pub fn rows(&self) -> usize {
        let columns = self.size.grid_columns();
        self.items.len().div_ceil(columns)
    }

    /// Total size in terminal cells
    pub fn dimensions(&self) -> (u16, u16) {
        let columns = self.size.grid_columns().min(self.items.len().max(1)) as u16;
        (
            columns * self.size.cell_width(),
            self.rows() as u16 * self.size.cell_height(),
        )
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let columns = self.size.grid_columns();
        let cell_w = self.size.cell_width();
        let cell_h = self.size.cell_height();
        let (grid_w, _) = self.dimensions();
        let origin_x = area.x + area.width.saturating_sub(grid_w) / 2;

        for (index, item) in self.items.iter().enumerate() {
            let col = (index % columns) as u16;
            let row = (index / columns) as u16;
            let cell = Rect::new(
                origin_x + col * cell_w,
                area.y + row * cell_h,
                cell_w,
                cell_h,
            )
            .intersection(area);

            if cell.is_empty() {
                continue;
            }
            self.render_cell(frame, cell, index, item, theme);
        }
    }

    fn render_cell(&self, frame: &mut Frame, cell: Rect, index: usize, item: &ImageRef, theme: &Theme) {
        let is_selected = self.selected == Some(index);
        let is_cursor = self.cursor == Some(index);

        let fill = theme.tile(item.accent(), index);
        let mut border_style = if is_selected {
            theme.title()
        } else if is_cursor {
            theme.border_focused()
        } else {
            theme.border()
        };
        let mut body_style = Style::default().bg(fill).fg(Color::White);

        if self.disabled {
            border_style = border_style.add_modifier(Modifier::DIM);
            body_style = body_style.add_modifier(Modifier::DIM);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if is_selected {
                BorderType::Thick
            } else if is_cursor {
                BorderType::Double
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .title(Line::from(format!("{}", index + 1)).right_aligned());

        let mark = if is_selected { "✓" } else { "" };
        let body = Paragraph::new(mark)
            .style(body_style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(body, cell);
    }
}
