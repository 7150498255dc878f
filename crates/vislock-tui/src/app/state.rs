//! Application state that lives outside the lock widget

use crate::ui::components::notification::NotificationManager;

/// Which part of the lock screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The image grid
    #[default]
    Grid,
    /// The password field
    Password,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Grid => Focus::Password,
            Focus::Password => Focus::Grid,
        }
    }
}

/// Cursor movement inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

/// View state owned by the terminal front-end
#[derive(Default)]
pub struct AppState {
    /// Focused input area
    pub focus: Focus,

    /// Grid cursor (item index)
    pub cursor: usize,

    /// Toast notifications
    pub notifications: NotificationManager,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the grid cursor, staying inside a grid of `count` items laid out
    /// in `columns` columns
    pub fn move_cursor(&mut self, direction: Move, columns: usize, count: usize) {
        if count == 0 || columns == 0 {
            return;
        }

        let cursor = self.cursor.min(count - 1);
        self.cursor = match direction {
            Move::Left if cursor % columns > 0 => cursor - 1,
            Move::Right if cursor % columns + 1 < columns && cursor + 1 < count => cursor + 1,
            Move::Up if cursor >= columns => cursor - columns,
            Move::Down if cursor + columns < count => cursor + columns,
            _ => cursor,
        };
    }

    /// Back to the initial view after a lock reset
    pub fn reset_view(&mut self) {
        self.focus = Focus::Grid;
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Move::Left, 0)]
    #[case(0, Move::Right, 1)]
    #[case(3, Move::Right, 3)]
    #[case(4, Move::Left, 4)]
    #[case(5, Move::Up, 1)]
    #[case(1, Move::Up, 1)]
    #[case(1, Move::Down, 5)]
    #[case(9, Move::Down, 9)]
    #[case(8, Move::Down, 8)]
    fn test_move_cursor_four_columns(
        #[case] start: usize,
        #[case] direction: Move,
        #[case] expected: usize,
    ) {
        // 10 items in 4 columns: rows [0..4], [4..8], [8..10]
        let mut state = AppState {
            cursor: start,
            ..AppState::default()
        };
        state.move_cursor(direction, 4, 10);
        assert_eq!(state.cursor, expected);
    }

    #[test]
    fn test_move_cursor_clamps_stale_cursor() {
        let mut state = AppState {
            cursor: 11,
            ..AppState::default()
        };
        state.move_cursor(Move::Left, 3, 3);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Grid.toggle(), Focus::Password);
        assert_eq!(Focus::Password.toggle(), Focus::Grid);
    }
}
