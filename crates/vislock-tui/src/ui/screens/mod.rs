//! Screens, one per group of lock phases

pub mod lock;
pub mod lockout;
pub mod success;
