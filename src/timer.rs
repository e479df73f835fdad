//! Cancellable one-shot wake-up.
//!
//! A [`OneShot`] remembers when it was armed and for how long. It never
//! repeats on its own: whoever observes it fire decides whether to arm it
//! again, which is how the engine chains per-step durations of different
//! lengths instead of ticking at a fixed rate.

use crate::time::{TimeDuration, TimeInstant};

/// A single pending deadline, or nothing.
#[derive(Clone, Copy)]
pub struct OneShot<I: TimeInstant> {
    pending: Option<Pending<I>>,
}

#[derive(Clone, Copy)]
struct Pending<I: TimeInstant> {
    armed_at: I,
    duration: I::Duration,
}

impl<I: TimeInstant> OneShot<I> {
    /// Creates a disarmed timer.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Arms the timer to fire `duration` after `now`.
    ///
    /// Replaces any deadline that was already pending.
    pub fn arm(&mut self, now: I, duration: I::Duration) {
        self.pending = Some(Pending {
            armed_at: now,
            duration,
        });
    }

    /// Cancels the pending deadline, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns true while a deadline is pending.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending deadline, or `None` when disarmed.
    ///
    /// Returns zero once the deadline has passed but the timer has not been
    /// polled yet.
    pub fn remaining(&self, now: I) -> Option<I::Duration> {
        self.pending.map(|pending| {
            let elapsed = now.duration_since(pending.armed_at);
            pending.duration.saturating_sub(elapsed)
        })
    }

    /// Fires the timer if its deadline has been reached.
    ///
    /// Returns true exactly once per arming. A fired timer is disarmed.
    pub fn poll(&mut self, now: I) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };

        let elapsed = now.duration_since(pending.armed_at);
        if pending.duration.saturating_sub(elapsed) == I::Duration::ZERO {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

impl<I: TimeInstant> Default for OneShot<I> {
    fn default() -> Self {
        Self::new()
    }
}
