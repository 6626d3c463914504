//! Cancellable deferred actions for form side effects.

use dioxus::prelude::{spawn, Task};
use gloo_timers::future::TimeoutFuture;

/// Handle to a single pending deferred action. Scheduling replaces (and
/// cancels) whatever is still pending, so a resubmission never races the
/// previous submission's handoff or reset. Owners cancel on unmount.
#[derive(Default)]
pub struct Deferred {
    task: Option<Task>,
}

impl Deferred {
    /// Run `action` after `delay_ms`, replacing any pending action.
    pub fn schedule(&mut self, delay_ms: u32, action: impl FnOnce() + 'static) {
        self.cancel();
        self.task = Some(spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            action();
        }));
    }

    /// Drop the pending action without running it.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}
