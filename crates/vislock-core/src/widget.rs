//! The lock widget state machine
//!
//! ```text
//!            select / edit
//!            ┌────────┐
//!            ▼        │
//!  reset ─▶ Idle ─────┘
//!            │ submit (selection + password present)
//!            ▼
//!         Checking ──── granted ───▶ Success ─┐
//!            │ denied                          │
//!            ├── attempts >= max ─▶ Locked ────┤ reset
//!            ▼                                 │
//!          Error ── display elapsed ─▶ Idle ◀──┘
//! ```
//!
//! The widget does no I/O and never reads the clock. Time-dependent calls
//! take the current [`Instant`] from the embedder, and deferred transitions
//! fire from [`LockWidget::poll`].

use std::fmt;
use std::time::{Duration, Instant};

use zeroize::{Zeroize, Zeroizing};

use crate::config::LockConfig;
use crate::delay::{DelayStrategy, FixedDelay};
use crate::error::{LockMessage, Result, ValidationError};
use crate::verify::{verify, Verdict};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for input
    #[default]
    Idle,
    /// A verification is pending
    Checking,
    /// Unlocked; terminal until reset
    Success,
    /// Showing a failed verification
    Error,
    /// Attempt budget exhausted; terminal until reset
    Locked,
}

impl Phase {
    /// Whether the phase only leaves through an explicit reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Success | Phase::Locked)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Checking => "Checking",
            Phase::Success => "Unlocked",
            Phase::Error => "Error",
            Phase::Locked => "Locked",
        }
    }
}

/// Why a submission was not accepted at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    /// A verification is already pending
    Checking,
    /// The previous failure is still on display
    ShowingError,
    Locked,
    /// Already unlocked
    Unlocked,
}

/// Outcome of [`LockWidget::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Nothing happened
    Ignored(Blocked),
    /// Input incomplete; no attempt consumed
    Invalid(ValidationError),
    /// Verification started and resolves on a later `poll`
    Checking,
    /// Verification resolved immediately
    Resolved(Verdict),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingKind {
    Verify { selected: usize },
    ErrorDisplay,
}

/// A deferred transition. Only fires if `epoch` still matches the session.
#[derive(Debug, Clone, Copy)]
struct Pending {
    kind: PendingKind,
    due: Instant,
    epoch: u64,
}

enum DelaySource {
    /// Follow the `timing` section of the current configuration
    Config,
    Injected(Box<dyn DelayStrategy>),
}

const MIN_PASSWORD_CAPACITY: usize = 32;

type SuccessCallback = Box<dyn FnMut()>;
type FailureCallback = Box<dyn FnMut(u32)>;

/// A visual lock session
///
/// Owns the configuration and all mutable session state. Dropping the widget
/// drops any pending transition with it.
pub struct LockWidget {
    config: LockConfig,
    delay: DelaySource,

    on_success: Option<SuccessCallback>,
    on_failure: Option<FailureCallback>,

    selected: Option<usize>,
    password: Zeroizing<String>,
    password_visible: bool,
    attempts: u32,
    phase: Phase,
    last_message: Option<LockMessage>,

    pending: Option<Pending>,
    /// Bumped on every reset so stale deferred transitions can be recognised
    epoch: u64,
}

impl LockWidget {
    /// Mount a widget whose delays follow `config.timing`
    pub fn new(config: LockConfig) -> Result<Self> {
        Self::build(config, DelaySource::Config)
    }

    /// Mount a widget with an injected delay strategy
    pub fn with_delay(config: LockConfig, delay: impl DelayStrategy + 'static) -> Result<Self> {
        Self::build(config, DelaySource::Injected(Box::new(delay)))
    }

    fn build(config: LockConfig, delay: DelaySource) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            items = config.visible_items().len(),
            max_attempts = config.max_attempts,
            "Mounting visual lock"
        );

        Ok(Self {
            config,
            delay,
            on_success: None,
            on_failure: None,
            selected: None,
            password: Zeroizing::new(String::new()),
            password_visible: false,
            attempts: 0,
            phase: Phase::Idle,
            last_message: None,
            pending: None,
            epoch: 0,
        })
    }

    /// Register the success callback, replacing any previous one
    pub fn on_success(&mut self, callback: impl FnMut() + 'static) -> &mut Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Register the failure callback. It receives the updated attempt count.
    pub fn on_failure(&mut self, callback: impl FnMut(u32) + 'static) -> &mut Self {
        self.on_failure = Some(Box::new(callback));
        self
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Select an item. Returns whether the selection was accepted.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.accepts_input() {
            tracing::debug!(index, phase = ?self.phase, "Selection ignored");
            return false;
        }

        if index >= self.config.visible_items().len() {
            tracing::debug!(index, "Selection outside the grid ignored");
            return false;
        }

        self.acknowledge_error();
        self.selected = Some(index);
        self.last_message = None;
        tracing::debug!(index, "Item selected");
        true
    }

    /// Replace the entered password
    pub fn set_password(&mut self, password: &str) -> bool {
        if !self.begin_edit() {
            return false;
        }
        self.password.zeroize();
        self.append_password(password);
        true
    }

    /// Append one character to the entered password
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.begin_edit() {
            return false;
        }
        self.append_password(c.encode_utf8(&mut [0; 4]));
        true
    }

    /// Remove the last character of the entered password.
    ///
    /// Returns whether anything changed. During Error the edit acknowledges
    /// the error and clears the password, so that counts as a change even
    /// though there is nothing left to remove.
    pub fn pop_char(&mut self) -> bool {
        let acknowledged = self.phase == Phase::Error;
        if !self.begin_edit() {
            return false;
        }
        self.password.pop().is_some() || acknowledged
    }

    /// Show or hide the entered password. Display only; survives reset.
    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Submit the current selection and password
    pub fn submit(&mut self, now: Instant) -> Submission {
        match self.phase {
            Phase::Idle => {}
            Phase::Checking => return Submission::Ignored(Blocked::Checking),
            Phase::Error => return Submission::Ignored(Blocked::ShowingError),
            Phase::Locked => return Submission::Ignored(Blocked::Locked),
            Phase::Success => return Submission::Ignored(Blocked::Unlocked),
        }

        let selected = match self.selected {
            Some(index) => index,
            None => return self.reject(ValidationError::SelectionRequired),
        };

        if self.password.trim().is_empty() {
            return self.reject(ValidationError::PasswordRequired);
        }

        let latency = self.verification_latency();
        self.phase = Phase::Checking;
        tracing::debug!(selected, ?latency, "Verification started");

        if latency.is_zero() {
            return Submission::Resolved(self.resolve(selected, now));
        }

        self.schedule(PendingKind::Verify { selected }, now, latency);
        Submission::Checking
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Fire every deferred transition due at `now`.
    ///
    /// Returns the new phase if anything changed.
    pub fn poll(&mut self, now: Instant) -> Option<Phase> {
        let mut changed = None;

        while let Some(pending) = self.pending.filter(|p| p.due <= now) {
            self.pending = None;

            if pending.epoch != self.epoch {
                tracing::debug!(
                    scheduled = pending.epoch,
                    current = self.epoch,
                    "Discarding stale deferred transition"
                );
                continue;
            }

            match pending.kind {
                PendingKind::Verify { selected } => {
                    self.resolve(selected, pending.due);
                }
                PendingKind::ErrorDisplay => self.end_error_display(),
            }
            changed = Some(self.phase);
        }

        changed
    }

    /// When the next deferred transition is due, if any
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Return every piece of session state to its initial value and cancel
    /// any pending transition
    pub fn reset(&mut self) {
        self.selected = None;
        self.password.zeroize();
        self.attempts = 0;
        self.phase = Phase::Idle;
        self.last_message = None;
        self.pending = None;
        self.epoch = self.epoch.wrapping_add(1);
        tracing::info!("Visual lock reset");
    }

    /// Swap in a new configuration and start a fresh session.
    ///
    /// On error the widget keeps its current configuration and state.
    pub fn remount(&mut self, config: LockConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &LockConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// The password as it should be displayed
    pub fn masked_password(&self) -> String {
        if self.password_visible {
            self.password.to_string()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }

    /// Failed verifications in this session
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.config.max_attempts.saturating_sub(self.attempts)
    }

    pub fn last_message(&self) -> Option<&LockMessage> {
        self.last_message.as_ref()
    }

    /// Whether a submit would start a verification
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle && self.selected.is_some() && !self.password.trim().is_empty()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn verification_latency(&self) -> Duration {
        match &self.delay {
            DelaySource::Config => FixedDelay::from(self.config.timing).verification(),
            DelaySource::Injected(strategy) => strategy.verification(),
        }
    }

    fn error_display_delay(&self) -> Duration {
        match &self.delay {
            DelaySource::Config => FixedDelay::from(self.config.timing).error_display(),
            DelaySource::Injected(strategy) => strategy.error_display(),
        }
    }

    /// Append to the password without letting `String` reallocate in place.
    ///
    /// A reallocation would free the old buffer with the typed prefix still
    /// in it. Growth instead moves into a fresh buffer and drops the old
    /// `Zeroizing` wrapper, which wipes it.
    fn append_password(&mut self, text: &str) {
        let needed = self.password.len() + text.len();
        if needed > self.password.capacity() {
            let capacity = needed
                .max(self.password.capacity() * 2)
                .max(MIN_PASSWORD_CAPACITY);
            let mut grown = Zeroizing::new(String::with_capacity(capacity));
            grown.push_str(&self.password);
            self.password = grown;
        }
        self.password.push_str(text);
    }

    fn accepts_input(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Error)
    }

    fn begin_edit(&mut self) -> bool {
        if !self.accepts_input() {
            tracing::debug!(phase = ?self.phase, "Password edit ignored");
            return false;
        }
        self.acknowledge_error();
        true
    }

    /// Leave the error display early, with the same effect as the deferred
    /// transition
    fn acknowledge_error(&mut self) {
        if self.phase == Phase::Error {
            self.end_error_display();
        }
    }

    fn reject(&mut self, error: ValidationError) -> Submission {
        tracing::debug!(%error, "Submission rejected");
        self.last_message = Some(error.into());
        Submission::Invalid(error)
    }

    fn schedule(&mut self, kind: PendingKind, now: Instant, after: Duration) {
        self.pending = Some(Pending {
            kind,
            due: now + after,
            epoch: self.epoch,
        });
    }

    fn resolve(&mut self, selected: usize, now: Instant) -> Verdict {
        let verdict = verify(selected, &self.password, &self.config);

        match verdict {
            Verdict::Granted => {
                self.phase = Phase::Success;
                self.last_message = None;
                tracing::info!(attempts = self.attempts, "Visual lock opened");

                if let Some(callback) = self.on_success.as_mut() {
                    callback();
                }
            }
            Verdict::Denied(mismatch) => {
                self.attempts += 1;
                self.last_message = Some(mismatch.into());

                if self.attempts >= self.config.max_attempts {
                    self.phase = Phase::Locked;
                    tracing::warn!(
                        attempts = self.attempts,
                        max = self.config.max_attempts,
                        "Attempt budget exhausted, visual lock locked"
                    );
                } else {
                    self.phase = Phase::Error;
                    let display = self.error_display_delay();
                    self.schedule(PendingKind::ErrorDisplay, now, display);
                    tracing::info!(
                        attempts = self.attempts,
                        max = self.config.max_attempts,
                        %mismatch,
                        "Verification failed"
                    );
                }

                if let Some(callback) = self.on_failure.as_mut() {
                    callback(self.attempts);
                }
            }
        }

        verdict
    }

    fn end_error_display(&mut self) {
        self.pending = None;

        if self.attempts >= self.config.max_attempts {
            self.phase = Phase::Locked;
            return;
        }

        self.phase = Phase::Idle;
        self.selected = None;
        self.password.zeroize();
    }
}

impl fmt::Debug for LockWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockWidget")
            .field("phase", &self.phase)
            .field("selected", &self.selected)
            .field("attempts", &self.attempts)
            .field("max_attempts", &self.config.max_attempts)
            .field("last_message", &self.last_message)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::Immediate;
    use crate::verify::Mismatch;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn scenario_config(max_attempts: u32) -> LockConfig {
        LockConfig::builder()
            .correct_index(2)
            .expected_password("demo123")
            .max_attempts(max_attempts)
            .build()
            .unwrap()
    }

    fn instant_widget(max_attempts: u32) -> LockWidget {
        LockWidget::with_delay(scenario_config(max_attempts), Immediate).unwrap()
    }

    fn slow_widget() -> LockWidget {
        LockWidget::with_delay(
            scenario_config(3),
            FixedDelay::new(Duration::from_millis(1500), Duration::from_millis(2000)),
        )
        .unwrap()
    }

    fn attempt(widget: &mut LockWidget, index: usize, password: &str, now: Instant) -> Submission {
        assert!(widget.select(index));
        assert!(widget.set_password(password));
        widget.submit(now)
    }

    #[test]
    fn test_initial_state() {
        let widget = instant_widget(3);
        assert_eq!(widget.phase(), Phase::Idle);
        assert_eq!(widget.selected(), None);
        assert_eq!(widget.password(), "");
        assert_eq!(widget.attempts(), 0);
        assert!(widget.last_message().is_none());
        assert!(!widget.can_submit());
    }

    #[test]
    fn test_walkthrough_scenario() {
        let mut widget = instant_widget(3);
        let successes = Rc::new(Cell::new(0));
        let failures = Rc::new(RefCell::new(Vec::new()));

        let s = successes.clone();
        widget.on_success(move || s.set(s.get() + 1));
        let f = failures.clone();
        widget.on_failure(move |n| f.borrow_mut().push(n));

        let now = Instant::now();

        let result = attempt(&mut widget, 0, "wrong", now);
        assert_eq!(result, Submission::Resolved(Verdict::Denied(Mismatch::Both)));
        assert_eq!(widget.attempts(), 1);
        assert_eq!(widget.phase(), Phase::Error);
        assert_eq!(widget.last_message().unwrap().to_string(), "both incorrect");
        assert_eq!(widget.poll(now), Some(Phase::Idle));
        assert_eq!(widget.selected(), None);
        assert_eq!(widget.password(), "");

        let result = attempt(&mut widget, 2, "wrong", now);
        assert_eq!(result, Submission::Resolved(Verdict::Denied(Mismatch::Password)));
        assert_eq!(widget.attempts(), 2);
        assert_eq!(widget.last_message().unwrap().to_string(), "password incorrect");
        widget.poll(now);

        let result = attempt(&mut widget, 2, "demo123", now);
        assert_eq!(result, Submission::Resolved(Verdict::Granted));
        assert_eq!(widget.phase(), Phase::Success);
        assert_eq!(successes.get(), 1);
        assert_eq!(*failures.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_single_attempt_locks_immediately() {
        let mut widget = instant_widget(1);
        let now = Instant::now();

        attempt(&mut widget, 5, "nope", now);
        assert_eq!(widget.phase(), Phase::Locked);
        assert_eq!(widget.pending_deadline(), None);

        // Nothing brings it back to idle except reset
        assert_eq!(widget.poll(now + Duration::from_secs(60)), None);
        assert_eq!(widget.phase(), Phase::Locked);
        assert!(!widget.select(2));
        assert!(!widget.set_password("demo123"));
        assert_eq!(widget.submit(now), Submission::Ignored(Blocked::Locked));
    }

    #[test]
    fn test_validation_consumes_no_attempt() {
        let mut widget = instant_widget(3);
        let fired = Rc::new(Cell::new(0));
        let a = fired.clone();
        widget.on_success(move || a.set(a.get() + 1));
        let b = fired.clone();
        widget.on_failure(move |_| b.set(b.get() + 1));
        let now = Instant::now();

        assert!(widget.set_password("demo123"));
        assert_eq!(
            widget.submit(now),
            Submission::Invalid(ValidationError::SelectionRequired)
        );
        assert_eq!(
            widget.last_message(),
            Some(&LockMessage::Validation(ValidationError::SelectionRequired))
        );

        assert!(widget.select(2));
        assert!(widget.last_message().is_none());
        assert!(widget.set_password("   "));
        assert_eq!(
            widget.submit(now),
            Submission::Invalid(ValidationError::PasswordRequired)
        );

        assert_eq!(widget.attempts(), 0);
        assert_eq!(widget.phase(), Phase::Idle);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_fixed_delay_timeline() {
        let mut widget = slow_widget();
        let t0 = Instant::now();

        assert_eq!(attempt(&mut widget, 1, "wrong", t0), Submission::Checking);
        assert_eq!(widget.phase(), Phase::Checking);
        assert_eq!(widget.pending_deadline(), Some(t0 + Duration::from_millis(1500)));

        // Input and submit are disabled while checking
        assert!(!widget.select(2));
        assert!(!widget.push_char('x'));
        assert_eq!(widget.submit(t0), Submission::Ignored(Blocked::Checking));

        assert_eq!(widget.poll(t0 + Duration::from_millis(1000)), None);
        assert_eq!(
            widget.poll(t0 + Duration::from_millis(1500)),
            Some(Phase::Error)
        );
        assert_eq!(widget.attempts(), 1);

        // The error display is measured from the moment verification resolved
        assert_eq!(widget.poll(t0 + Duration::from_millis(3000)), None);
        assert_eq!(
            widget.poll(t0 + Duration::from_millis(3500)),
            Some(Phase::Idle)
        );
        assert_eq!(widget.attempts(), 1);
        assert_eq!(widget.last_message().unwrap().to_string(), "both incorrect");
    }

    #[test]
    fn test_late_poll_runs_both_transitions() {
        let mut widget = slow_widget();
        let t0 = Instant::now();

        attempt(&mut widget, 1, "wrong", t0);
        assert_eq!(widget.poll(t0 + Duration::from_secs(10)), Some(Phase::Idle));
        assert_eq!(widget.attempts(), 1);
    }

    #[test]
    fn test_reset_cancels_pending_verification() {
        let mut widget = slow_widget();
        let failures = Rc::new(Cell::new(0));
        let f = failures.clone();
        widget.on_failure(move |_| f.set(f.get() + 1));
        let t0 = Instant::now();

        attempt(&mut widget, 1, "wrong", t0);
        widget.reset();

        assert_eq!(widget.pending_deadline(), None);
        assert_eq!(widget.poll(t0 + Duration::from_secs(10)), None);
        assert_eq!(widget.attempts(), 0);
        assert_eq!(widget.phase(), Phase::Idle);
        assert_eq!(failures.get(), 0);
    }

    #[test]
    fn test_reset_during_error_display() {
        let mut widget = slow_widget();
        let t0 = Instant::now();

        attempt(&mut widget, 1, "wrong", t0);
        widget.poll(t0 + Duration::from_millis(1500));
        assert_eq!(widget.phase(), Phase::Error);

        widget.reset();
        assert!(widget.select(2));
        assert!(widget.set_password("typing"));

        // The old error display must not wipe the fresh input
        assert_eq!(widget.poll(t0 + Duration::from_secs(10)), None);
        assert_eq!(widget.selected(), Some(2));
        assert_eq!(widget.password(), "typing");
    }

    #[test]
    fn test_stale_epoch_is_discarded() {
        let mut widget = slow_widget();
        let t0 = Instant::now();

        widget.pending = Some(Pending {
            kind: PendingKind::Verify { selected: 2 },
            due: t0,
            epoch: widget.epoch.wrapping_sub(1),
        });
        widget.password = Zeroizing::new("demo123".to_string());

        assert_eq!(widget.poll(t0), None);
        assert_eq!(widget.phase(), Phase::Idle);
        assert!(widget.pending.is_none());
    }

    #[test]
    fn test_input_during_error_acknowledges() {
        let mut widget = slow_widget();
        let t0 = Instant::now();

        attempt(&mut widget, 1, "wrong", t0);
        widget.poll(t0 + Duration::from_millis(1500));
        assert_eq!(widget.phase(), Phase::Error);
        assert_eq!(
            widget.submit(t0 + Duration::from_millis(1600)),
            Submission::Ignored(Blocked::ShowingError)
        );

        assert!(widget.select(3));
        assert_eq!(widget.phase(), Phase::Idle);
        assert_eq!(widget.selected(), Some(3));
        assert_eq!(widget.password(), "");
        assert_eq!(widget.pending_deadline(), None);
        assert_eq!(widget.attempts(), 1);
    }

    #[test]
    fn test_password_edit_during_error_keeps_message() {
        let mut widget = instant_widget(3);
        let now = Instant::now();

        attempt(&mut widget, 2, "wrong", now);
        assert!(widget.push_char('d'));
        assert_eq!(widget.phase(), Phase::Idle);
        assert_eq!(widget.password(), "d");
        assert_eq!(widget.selected(), None);
        assert_eq!(
            widget.last_message(),
            Some(&LockMessage::Mismatch(Mismatch::Password))
        );
    }

    #[test]
    fn test_reset_from_every_terminal_phase() {
        let now = Instant::now();

        let mut locked = instant_widget(1);
        attempt(&mut locked, 0, "x", now);
        assert_eq!(locked.phase(), Phase::Locked);
        locked.reset();

        let mut unlocked = instant_widget(3);
        attempt(&mut unlocked, 2, "demo123", now);
        assert_eq!(unlocked.phase(), Phase::Success);
        assert_eq!(unlocked.submit(now), Submission::Ignored(Blocked::Unlocked));
        unlocked.reset();

        for widget in [&locked, &unlocked] {
            assert_eq!(widget.phase(), Phase::Idle);
            assert_eq!(widget.selected(), None);
            assert_eq!(widget.password(), "");
            assert_eq!(widget.attempts(), 0);
            assert!(widget.last_message().is_none());
        }
    }

    #[test]
    fn test_out_of_range_selection() {
        let config = LockConfig::builder()
            .items(["a", "b", "c"])
            .correct_index(1)
            .build()
            .unwrap();
        let mut widget = LockWidget::with_delay(config, Immediate).unwrap();

        assert!(!widget.select(3));
        assert_eq!(widget.selected(), None);
        assert!(widget.select(2));
    }

    #[test]
    fn test_masked_password_and_visibility() {
        let mut widget = instant_widget(3);
        widget.set_password("abc");
        assert_eq!(widget.masked_password(), "•••");

        widget.toggle_password_visibility();
        assert_eq!(widget.masked_password(), "abc");

        widget.reset();
        assert!(widget.password_visible());

        assert!(!widget.pop_char());
    }

    #[test]
    fn test_remount_replaces_config() {
        let mut widget = LockWidget::new(scenario_config(3)).unwrap();
        let now = Instant::now();
        attempt(&mut widget, 0, "wrong", now);
        assert_eq!(widget.phase(), Phase::Checking);

        let next = LockConfig::builder()
            .max_attempts(5)
            .timing(crate::config::Timing {
                verification_ms: 0,
                error_display_ms: 0,
            })
            .build()
            .unwrap();
        widget.remount(next).unwrap();

        assert_eq!(widget.phase(), Phase::Idle);
        assert_eq!(widget.pending_deadline(), None);
        assert_eq!(widget.attempts_remaining(), 5);

        // Timing now comes from the new configuration
        assert_eq!(
            attempt(&mut widget, 0, "demo123", now),
            Submission::Resolved(Verdict::Granted)
        );
    }

    #[test]
    fn test_remount_rejects_invalid_config() {
        let mut widget = instant_widget(3);
        widget.select(1);

        let bad = LockConfig {
            max_attempts: 0,
            ..LockConfig::default()
        };
        assert!(widget.remount(bad).is_err());
        assert_eq!(widget.selected(), Some(1));
        assert_eq!(widget.config().max_attempts, 3);
    }

    #[test]
    fn test_can_submit() {
        let mut widget = instant_widget(3);
        widget.select(0);
        assert!(!widget.can_submit());
        widget.set_password(" ");
        assert!(!widget.can_submit());
        widget.set_password("x");
        assert!(widget.can_submit());
    }

    #[test]
    fn test_password_never_reallocates_in_place() {
        let mut widget = instant_widget(3);
        let mut moves = 0;

        for c in "correct horse battery staple, twice over".chars() {
            let before = (widget.password.as_ptr(), widget.password.capacity());
            let fits = widget.password.len() + c.len_utf8() <= before.1;

            assert!(widget.push_char(c));

            if fits {
                assert_eq!(widget.password.as_ptr(), before.0);
            } else {
                moves += 1;
                let expected = (before.1 * 2).max(MIN_PASSWORD_CAPACITY);
                assert!(widget.password.capacity() >= expected);
            }
        }

        assert_eq!(widget.password(), "correct horse battery staple, twice over");
        assert_eq!(moves, 2);
    }

    #[test]
    fn test_set_password_keeps_buffer_when_it_fits() {
        let mut widget = instant_widget(3);
        widget.set_password("first");
        let ptr = widget.password.as_ptr();

        widget.set_password("second");
        assert_eq!(widget.password.as_ptr(), ptr);
        assert_eq!(widget.password(), "second");
    }

    #[test]
    fn test_pop_char_acknowledging_error_reports_change() {
        let mut widget = instant_widget(3);
        let now = Instant::now();
        attempt(&mut widget, 4, "x", now);
        assert_eq!(widget.phase(), Phase::Error);

        assert!(widget.pop_char());
        assert_eq!(widget.phase(), Phase::Idle);
        assert_eq!(widget.password(), "");

        assert!(!widget.pop_char());
    }
}
