//! One-shot timer capability with cancellable tokens.
//!
//! DESIGN
//! ======
//! Scheduling hands back a [`TimerToken`] that cancels the pending callback
//! when dropped, so whoever owns the token owns the timer's lifetime. The
//! browser implementation wraps `gloo_timers::callback::Timeout`; tests use
//! `ManualTimers`, a deterministic clock driven by `advance`.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use gloo_timers::callback::Timeout;

/// Cancellation token for one scheduled callback.
///
/// Dropping the token cancels the callback if it has not fired yet;
/// cancelling after the callback ran is a no-op.
#[must_use]
pub struct TimerToken {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerToken {
    /// Wrap a cancellation thunk.
    #[must_use]
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Cancel explicitly instead of via drop.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerToken {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Source of one-shot timers.
pub trait Timers {
    /// Run `callback` once after `delay_ms` milliseconds. The returned token
    /// cancels the callback when dropped first.
    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerToken;
}

/// Browser timer source backed by `setTimeout`.
pub struct GlooTimers;

impl Timers for GlooTimers {
    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerToken {
        let handle = Timeout::new(delay_ms, callback);
        TimerToken::new(move || drop(handle))
    }
}

#[cfg(test)]
pub use manual::ManualTimers;
