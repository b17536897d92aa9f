// SPDX-License-Identifier: MPL-2.0
//! Dismiss timers keyed by toast identity.
//!
//! Each visible toast owns at most one armed deadline. Deadlines are plain
//! data checked against the tick clock, so cancelling one is just removing
//! its entry.

use super::toast::ToastId;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    id: ToastId,
    due: Instant,
}

/// Pending dismiss deadlines, in arming order.
#[derive(Debug, Default, Clone)]
pub struct DismissSchedule {
    entries: Vec<Entry>,
}

impl DismissSchedule {
    /// Creates an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (or re-arms) the timer for `id`.
    pub fn arm(&mut self, id: ToastId, due: Instant) {
        self.cancel(id);
        self.entries.push(Entry { id, due });
    }

    /// Cancels the timer for `id`.
    ///
    /// Returns `true` if a timer was armed.
    pub fn cancel(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Returns whether a timer is armed for `id`.
    #[must_use]
    pub fn is_armed(&self, id: ToastId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Removes and returns every timer due at or before `now`.
    ///
    /// Ids come back ordered by deadline; equal deadlines keep arming order.
    pub fn take_due(&mut self, now: Instant) -> Vec<ToastId> {
        let mut due: Vec<Entry> = Vec::new();
        self.entries.retain(|entry| {
            if entry.due <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        // Stable sort keeps arming order for ties.
        due.sort_by_key(|entry| entry.due);
        due.into_iter().map(|entry| entry.id).collect()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Number of armed timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no timer is armed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cancels every timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
