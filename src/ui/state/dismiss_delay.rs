// SPDX-License-Identifier: MPL-2.0
//! Toast dismiss delay domain type.
//!
//! This module provides a type-safe wrapper for the delay between a toast
//! becoming visible and its automatic hide.

use crate::config::{DEFAULT_TOAST_DISMISS_MS, MAX_TOAST_DISMISS_MS, MIN_TOAST_DISMISS_MS};
use std::time::Duration;

/// Toast dismiss delay in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5–30 seconds).
///
/// # Example
///
/// ```
/// use demo_preview::ui::state::DismissDelay;
///
/// let delay = DismissDelay::new(1500);
/// assert_eq!(delay.millis(), 1500);
///
/// // Values outside range are clamped
/// let too_high = DismissDelay::new(100_000);
/// assert_eq!(too_high.millis(), 30_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissDelay(u64);

impl DismissDelay {
    /// Creates a new dismiss delay, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TOAST_DISMISS_MS, MAX_TOAST_DISMISS_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DismissDelay {
    fn default() -> Self {
        Self(DEFAULT_TOAST_DISMISS_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(DismissDelay::new(0).millis(), MIN_TOAST_DISMISS_MS);
        assert_eq!(DismissDelay::new(u64::MAX).millis(), MAX_TOAST_DISMISS_MS);
    }

    #[test]
    fn default_is_three_seconds() {
        assert_eq!(DismissDelay::default().as_duration(), Duration::from_secs(3));
    }

    #[test]
    fn as_duration_converts_correctly() {
        assert_eq!(
            DismissDelay::new(1250).as_duration(),
            Duration::from_millis(1250)
        );
    }
}
