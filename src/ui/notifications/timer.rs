// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot countdown.
//!
//! A `Countdown` is armed with a deadline and fires at most once. Time is
//! passed in explicitly, so the owner decides when to poll (usually on a
//! periodic tick) and tests can drive it without sleeping.

use std::time::{Duration, Instant};

/// One-shot timer that fires once its deadline has passed.
///
/// ```
/// use std::time::{Duration, Instant};
/// use wavedrop::ui::notifications::Countdown;
///
/// let start = Instant::now();
/// let mut countdown = Countdown::started(start, Duration::from_millis(100));
///
/// assert!(!countdown.poll(start + Duration::from_millis(99)));
/// assert!(countdown.poll(start + Duration::from_millis(100)));
/// // Disarmed after firing.
/// assert!(!countdown.poll(start + Duration::from_millis(500)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    deadline: Option<Instant>,
}

impl Countdown {
    /// Returns a countdown armed to fire `duration` after `now`.
    #[must_use]
    pub fn started(now: Instant, duration: Duration) -> Self {
        let mut countdown = Self::default();
        countdown.start(now, duration);
        countdown
    }

    /// Arms (or re-arms) the countdown.
    pub fn start(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    /// Disarms the countdown. It will not fire until started again.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the deadline, `None` when disarmed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns `true` exactly once, on the first poll at or after the
    /// deadline, and disarms the countdown.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
