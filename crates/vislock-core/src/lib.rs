//! Vislock Core - State machine for a visual lock
//!
//! A visual lock asks the user to pick one image out of a grid and type a
//! matching password. Failed attempts are counted and the lock shuts once a
//! configurable maximum is reached.
//!
//! The crate holds no terminal or rendering code. An embedder constructs a
//! [`LockWidget`] from a [`LockConfig`], forwards user input to it, calls
//! [`LockWidget::poll`] from its tick loop and renders whatever the accessors
//! report.

pub mod config;
pub mod delay;
pub mod error;
pub mod verify;
pub mod widget;

pub use config::{
    DisplayOptions, ImageRef, LockConfig, LockConfigBuilder, SizeClass, ThemeMode, Timing,
    DEFAULT_PALETTE, MAX_VISIBLE_ITEMS,
};
pub use delay::{DelayStrategy, FixedDelay, Immediate};
pub use error::{ConfigError, LockMessage, Result, ValidationError};
pub use verify::{verify, Mismatch, Verdict};
pub use widget::{Blocked, LockWidget, Phase, Submission};

/// Default expected password when none is configured
pub const DEFAULT_PASSWORD: &str = "demo123";

/// Default number of failed attempts before the lock shuts
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
