//! Latency strategies for verification and error display
//!
//! The widget never sleeps. It asks its strategy how long a verification
//! should appear to take and how long a failure stays on screen, turns those
//! into deadlines against the `Instant` the embedder hands in, and resolves
//! them from [`crate::LockWidget::poll`].

use std::time::Duration;

use crate::config::Timing;

/// Supplies the artificial delays used by the widget
pub trait DelayStrategy: Send {
    /// Time between submit and the verification result
    fn verification(&self) -> Duration;

    /// Time a failed verification stays in the error phase
    fn error_display(&self) -> Duration;
}

/// No latency at all. Verification resolves inside `submit`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

impl DelayStrategy for Immediate {
    fn verification(&self) -> Duration {
        Duration::ZERO
    }

    fn error_display(&self) -> Duration {
        Duration::ZERO
    }
}

/// Fixed delays, typically taken from [`Timing`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDelay {
    pub verification: Duration,
    pub error_display: Duration,
}

impl FixedDelay {
    pub fn new(verification: Duration, error_display: Duration) -> Self {
        Self {
            verification,
            error_display,
        }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Timing::default().into()
    }
}

impl From<Timing> for FixedDelay {
    fn from(timing: Timing) -> Self {
        Self {
            verification: Duration::from_millis(timing.verification_ms),
            error_display: Duration::from_millis(timing.error_display_ms),
        }
    }
}

impl DelayStrategy for FixedDelay {
    fn verification(&self) -> Duration {
        self.verification
    }

    fn error_display(&self) -> Duration {
        self.error_display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fixed_delay() {
        let delay = FixedDelay::default();
        assert_eq!(delay.verification(), Duration::from_millis(1500));
        assert_eq!(delay.error_display(), Duration::from_millis(2000));
    }

    #[test]
    fn test_immediate_is_zero() {
        assert_eq!(Immediate.verification(), Duration::ZERO);
        assert_eq!(Immediate.error_display(), Duration::ZERO);
    }
}
