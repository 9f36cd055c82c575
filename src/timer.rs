//! Deferred Tasks
//!
//! One-shot timeouts behind a small trait so the feed can be driven by
//! browser timers in the app and by a virtual clock in tests.

use gloo_timers::callback::Timeout;

/// Handle to a scheduled task
pub trait TimerHandle {
    /// Stop the task from running if it has not fired yet
    fn cancel(self);
}

pub trait Scheduler {
    type Handle: TimerHandle;

    /// Run `task` once after `delay_ms` milliseconds
    fn schedule(&self, delay_ms: u32, task: impl FnOnce() + 'static) -> Self::Handle;
}

/// `setTimeout` via gloo-timers
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Pending browser timeout. Dropping it clears the timeout, so keep it
/// alive until it fires or is cancelled.
pub struct BrowserTimer(Timeout);

impl TimerHandle for BrowserTimer {
    fn cancel(self) {
        self.0.cancel();
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn schedule(&self, delay_ms: u32, task: impl FnOnce() + 'static) -> BrowserTimer {
        BrowserTimer(Timeout::new(delay_ms, task))
    }
}
