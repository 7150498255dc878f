//! Toast notification component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::Theme;

/// Notification severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Toast notification
#[derive(Clone, Debug)]
pub struct Notification {
    /// Message to display
    pub message: String,
    /// Severity level
    pub level: NotificationLevel,
    /// Remaining ticks until dismissal
    pub ttl: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel, ttl: u64) -> Self {
        Self {
            message: message.into(),
            level,
            ttl,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, 20) // ~2 seconds at 100ms ticks
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success, 30)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning, 30)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error, 50)
    }

    pub fn is_expired(&self) -> bool {
        self.ttl == 0
    }

    pub fn tick(&mut self) {
        self.ttl = self.ttl.saturating_sub(1);
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Success => "✓",
            NotificationLevel::Warning => "⚠",
            NotificationLevel::Error => "✗",
        }
    }

    /// Render the notification in the top-right corner of `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = match self.level {
            NotificationLevel::Info => theme.info(),
            NotificationLevel::Success => theme.success(),
            NotificationLevel::Warning => theme.warning(),
            NotificationLevel::Error => theme.danger(),
        };

        let text = format!("{} {}", self.icon(), self.message);
        let width = (text.width() as u16 + 4).min(area.width);
        let height = 3.min(area.height);
        if width == 0 || height == 0 {
            return;
        }

        let x = area.x + area.width.saturating_sub(width + 1);
        let toast_area = Rect::new(x, area.y, width, height);

        frame.render_widget(Clear, toast_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .style(theme.background());
        let content = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(content, toast_area);
    }
}

/// Notification manager for stacked toasts
pub struct NotificationManager {
    notifications: Vec<Notification>,
    max_visible: usize,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            max_visible: 3,
        }
    }

    /// Add a notification, dropping the oldest beyond the visible limit
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
        while self.notifications.len() > self.max_visible {
            self.notifications.remove(0);
        }
    }

    /// Tick all notifications and remove expired
    pub fn tick(&mut self) {
        for n in &mut self.notifications {
            n.tick();
        }
        self.notifications.retain(|n| !n.is_expired());
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Render all active notifications
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        for (i, notification) in self.notifications.iter().enumerate() {
            let offset_y = (i * 3) as u16;
            if offset_y >= area.height {
                break;
            }
            let adjusted_area = Rect::new(
                area.x,
                area.y + offset_y,
                area.width,
                area.height - offset_y,
            );
            notification.render(frame, adjusted_area, theme);
        }
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let mut manager = NotificationManager::new();
        manager.push(Notification::new("short", NotificationLevel::Info, 1));
        manager.push(Notification::warning("long"));
        assert_eq!(manager.len(), 2);

        manager.tick();
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_visible_limit() {
        let mut manager = NotificationManager::new();
        for i in 0..5 {
            manager.push(Notification::info(format!("n{}", i)));
        }
        assert_eq!(manager.len(), 3);
        assert_eq!(manager.notifications[0].message, "n2");
    }
}
