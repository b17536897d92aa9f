// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation between two values.
//!
//! Used for the source panel height change and the toast slide-fade. The
//! state machines only ever store target values; a `Transition` is the view
//! layer's record of where the previous value was and when the change began.

use std::time::{Duration, Instant};

/// Linear ramp from `from` to `to`, eased on read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    /// A transition that is already at rest on `value`.
    #[must_use]
    pub fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started_at: now,
            duration: Duration::ZERO,
        }
    }

    /// Starts a new ramp towards `to` from wherever the current one is at `now`.
    #[must_use]
    pub fn retarget(self, to: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from: self.value(now),
            to,
            started_at: now,
            duration,
        }
    }

    /// Raw progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        progress(self.started_at, self.duration, now)
    }

    /// Eased value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        let t = ease_out(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    /// Whether the ramp has reached its target.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Fraction of `duration` elapsed since `start`, clamped to `0.0..=1.0`.
///
/// A zero duration is always complete.
#[must_use]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Cubic ease-out.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_250: Duration = Duration::from_millis(250);

    #[test]
    fn settled_transition_is_finished() {
        let now = Instant::now();
        let t = Transition::settled(120.0, now);
        assert!(t.is_finished(now));
        assert_eq!(t.value(now), 120.0);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let start = Instant::now();
        let t = Transition::settled(0.0, start).retarget(240.0, start, MS_250);
        assert_eq!(t.value(start), 0.0);
        assert_eq!(t.value(start + MS_250), 240.0);
        assert!(t.is_finished(start + MS_250));
    }

    #[test]
    fn value_moves_monotonically() {
        let start = Instant::now();
        let t = Transition::settled(0.0, start).retarget(100.0, start, MS_250);
        let early = t.value(start + Duration::from_millis(50));
        let late = t.value(start + Duration::from_millis(200));
        assert!(early > 0.0 && early < late && late < 100.0);
    }

    #[test]
    fn reversing_mid_flight_does_not_jump() {
        let start = Instant::now();
        let mid = start + Duration::from_millis(100);
        let opening = Transition::settled(0.0, start).retarget(200.0, start, MS_250);
        let at_mid = opening.value(mid);
        let closing = opening.retarget(0.0, mid, MS_250);
        assert_eq!(closing.value(mid), at_mid);
        assert_eq!(closing.value(mid + MS_250), 0.0);
    }

    #[test]
    fn zero_duration_progress_is_complete() {
        let now = Instant::now();
        assert_eq!(progress(now, Duration::ZERO, now), 1.0);
    }

    #[test]
    fn ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
    }
}
