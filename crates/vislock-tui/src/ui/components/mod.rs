//! Reusable UI components

pub mod grid;
pub mod notification;
pub mod password;
