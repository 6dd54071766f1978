// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.

use std::time::Duration;

/// Display duration bounds, in milliseconds.
pub mod display_duration_bounds {
    /// Shortest accepted duration. Durations must be positive.
    pub const MIN_MS: u64 = 1;
    /// Default duration.
    pub const DEFAULT_MS: u64 = 3000;
}

/// Time a notification stays visible before its exit animation starts.
///
/// Always positive: a zero request is raised to
/// [`display_duration_bounds::MIN_MS`].
///
/// ```
/// use wavedrop::domain::notification::DisplayDuration;
///
/// assert_eq!(DisplayDuration::default().as_millis(), 3000);
/// assert_eq!(DisplayDuration::from_millis(0).as_millis(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayDuration(u64);

impl DisplayDuration {
    /// Creates a display duration from milliseconds.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.max(display_duration_bounds::MIN_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(display_duration_bounds::DEFAULT_MS)
    }
}

impl From<Duration> for DisplayDuration {
    fn from(duration: Duration) -> Self {
        Self::from_millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_raised_to_minimum() {
        assert_eq!(
            DisplayDuration::from_millis(0).as_millis(),
            display_duration_bounds::MIN_MS
        );
    }

    #[test]
    fn positive_values_are_kept() {
        assert_eq!(DisplayDuration::from_millis(100).as_millis(), 100);
        assert_eq!(DisplayDuration::from_millis(60_000).as_millis(), 60_000);
    }

    #[test]
    fn converts_from_std_duration() {
        let duration = DisplayDuration::from(Duration::from_secs(2));
        assert_eq!(duration.as_duration(), Duration::from_secs(2));
    }
}
