//! Vislock TUI Library
//!
//! Terminal embedder for the visual lock: mounts one
//! [`vislock_core::LockWidget`], feeds it keyboard input and clock ticks, and
//! renders its state with ratatui.

pub mod app;
pub mod cli;
pub mod ui;

pub use app::App;
