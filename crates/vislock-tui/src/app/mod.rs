//! Application state and event handling

mod config;
mod events;
mod state;

pub use config::{ConfigError, Fallback, Loaded, TuiConfig};
pub use events::LockEvent;
pub use state::{AppState, Focus, Move};

use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use vislock_core::{Immediate, LockWidget, Phase, Submission};

use crate::ui::{self, components::notification::Notification, Theme};

/// Main application struct
pub struct App {
    /// The lock being displayed
    pub widget: LockWidget,

    /// Front-end view state
    pub state: AppState,

    /// Colour palette for the configured theme
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter for animations
    pub tick: u64,

    tick_rate: Duration,

    /// Last tick time
    last_tick: Instant,

    /// Outcomes raised by the widget callbacks
    events: mpsc::Receiver<LockEvent>,
}

impl App {
    /// Create an app whose delays follow the lock configuration
    pub fn new(settings: TuiConfig) -> vislock_core::Result<Self> {
        let tick_rate = settings.tick_rate();
        let widget = LockWidget::new(settings.lock)?;
        Ok(Self::mount(widget, tick_rate))
    }

    /// Create an app that verifies without simulated latency
    pub fn instant(settings: TuiConfig) -> vislock_core::Result<Self> {
        let tick_rate = settings.tick_rate();
        let widget = LockWidget::with_delay(settings.lock, Immediate)?;
        Ok(Self::mount(widget, tick_rate))
    }

    fn mount(mut widget: LockWidget, tick_rate: Duration) -> Self {
        let events = events::connect(&mut widget);
        let theme = Theme::from_mode(widget.config().display.theme);

        Self {
            widget,
            state: AppState::new(),
            theme,
            should_quit: false,
            tick: 0,
            tick_rate,
            last_tick: Instant::now(),
            events,
        }
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key, Instant::now());
                    }
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.on_tick(Instant::now());
                self.last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Advance timers: deferred lock transitions, callback outcomes, toasts
    pub fn on_tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);

        if let Some(phase) = self.widget.poll(now) {
            tracing::debug!(phase = phase.label(), "Deferred transition fired");
        }

        self.drain_events();
        self.state.notifications.tick();
    }

    fn drain_events(&mut self) {
        let max = self.widget.config().max_attempts;

        for event in self.events.try_iter() {
            let notification = match event {
                LockEvent::Unlocked => Notification::success("Unlocked"),
                LockEvent::Failed { attempts } if attempts >= max => {
                    Notification::error(format!("Attempt {}/{} failed, locked", attempts, max))
                }
                LockEvent::Failed { attempts } => {
                    Notification::warning(format!("Attempt {}/{} failed", attempts, max))
                }
            };
            self.state.notifications.push(notification);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global handlers
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.reset();
                return;
            }
            _ => {}
        }

        match self.widget.phase() {
            Phase::Success | Phase::Locked => self.handle_terminal_key(key.code),
            Phase::Checking => {}
            Phase::Idle | Phase::Error => match (key.code, self.state.focus) {
                (KeyCode::F(2), _) => self.widget.toggle_password_visibility(),
                (code, Focus::Grid) => self.handle_grid_key(code),
                (code, Focus::Password) => self.handle_password_key(code, now),
            },
        }

        // Callbacks fire synchronously when verification is instant
        self.drain_events();
    }

    fn handle_terminal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => self.reset(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, key: KeyCode) {
        let display = self.widget.config().display;
        let columns = display.size.grid_columns();
        let count = self.widget.config().visible_items().len();

        match key {
            KeyCode::Tab | KeyCode::BackTab => self.state.focus = self.state.focus.toggle(),
            KeyCode::Left | KeyCode::Char('h') => self.state.move_cursor(Move::Left, columns, count),
            KeyCode::Right | KeyCode::Char('l') => {
                self.state.move_cursor(Move::Right, columns, count)
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.move_cursor(Move::Up, columns, count),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_cursor(Move::Down, columns, count),
            KeyCode::Char(' ') => {
                self.widget.select(self.state.cursor);
            }
            KeyCode::Enter => {
                if self.widget.select(self.state.cursor) {
                    self.state.focus = Focus::Password;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if self.widget.select(index) {
                    self.state.cursor = index;
                }
            }
            _ => {}
        }
    }

    fn handle_password_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Tab | KeyCode::BackTab => self.state.focus = self.state.focus.toggle(),
            KeyCode::Backspace => {
                self.widget.pop_char();
            }
            KeyCode::Char(c) => {
                self.widget.push_char(c);
            }
            KeyCode::Enter => self.submit(now),
            _ => {}
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.widget.submit(now) {
            Submission::Invalid(error) => {
                tracing::debug!(%error, "Submission incomplete");
                if self.widget.selected().is_none() {
                    self.state.focus = Focus::Grid;
                }
            }
            Submission::Ignored(reason) => {
                tracing::debug!(?reason, "Submission ignored");
            }
            Submission::Checking | Submission::Resolved(_) => {}
        }
    }

    fn reset(&mut self) {
        self.widget.reset();
        self.state.reset_view();
        self.state.notifications.push(Notification::info("Lock reset"));
    }
}
