//! Outcome events raised by the lock callbacks

use std::sync::mpsc;

use vislock_core::LockWidget;

/// Terminal outcomes reported by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockEvent {
    /// Verification succeeded
    Unlocked,
    /// Verification failed; carries the updated attempt count
    Failed { attempts: u32 },
}

/// Wire both widget callbacks into a channel the app drains every tick
pub fn connect(widget: &mut LockWidget) -> mpsc::Receiver<LockEvent> {
    let (tx, rx) = mpsc::channel();
    let failure_tx = tx.clone();

    widget
        .on_success(move || {
            let _ = tx.send(LockEvent::Unlocked);
        })
        .on_failure(move |attempts| {
            let _ = failure_tx.send(LockEvent::Failed { attempts });
        });

    rx
}
