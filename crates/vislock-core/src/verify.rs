//! Pure verification of a selection/password pair

use thiserror::Error;

use crate::config::LockConfig;

/// Which half of the key was wrong
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    #[error("both incorrect")]
    Both,

    #[error("image incorrect")]
    Image,

    #[error("password incorrect")]
    Password,
}

/// Result of a completed verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Granted,
    Denied(Mismatch),
}

impl Verdict {
    pub fn is_granted(&self) -> bool {
        matches!(self, Verdict::Granted)
    }
}

/// Check a selection and password against the configuration.
///
/// The password is compared exactly; surrounding whitespace is significant.
pub fn verify(selected: usize, entered: &str, config: &LockConfig) -> Verdict {
    let image_ok = selected == config.correct_index;
    let password_ok = entered == config.expected_password.as_str();

    match (image_ok, password_ok) {
        (true, true) => Verdict::Granted,
        (false, false) => Verdict::Denied(Mismatch::Both),
        (false, true) => Verdict::Denied(Mismatch::Image),
        (true, false) => Verdict::Denied(Mismatch::Password),
    }
}
