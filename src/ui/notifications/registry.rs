// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastRegistry` owns every active toast, assigns each one a vertical
//! stacking offset when it is opened, arms its dismiss timer, and removes it
//! once its exit animation has finished. It is owned by the application root
//! and handed by `&mut` to whatever needs to raise a notification.

use super::schedule::DismissSchedule;
use super::toast::{Toast, ToastId};
use crate::ui::design_tokens::sizing::{TOAST_GAP, TOAST_HEIGHT};
use crate::ui::state::DismissDelay;
use std::time::Instant;

/// Vertical offset of the toast opened while `depth` others are active.
///
/// Offsets are assigned once; removing a toast leaves the others in place.
#[must_use]
pub fn stacking_offset(depth: usize) -> f32 {
    if depth == 0 {
        TOAST_GAP
    } else {
        let depth = depth as f32;
        (depth + 1.0) * TOAST_GAP + depth * TOAST_HEIGHT
    }
}

/// Ordered set of active toasts (insertion order is stacking order).
#[derive(Debug)]
pub struct ToastRegistry {
    active: Vec<Toast>,
    schedule: DismissSchedule,
    next_id: u64,
    dismiss_delay: DismissDelay,
    default_content: String,
}

impl ToastRegistry {
    /// Creates an empty registry using `default_content` for toasts opened
    /// without explicit text.
    #[must_use]
    pub fn new(default_content: impl Into<String>) -> Self {
        Self {
            active: Vec::new(),
            schedule: DismissSchedule::new(),
            next_id: 0,
            dismiss_delay: DismissDelay::default(),
            default_content: default_content.into(),
        }
    }

    /// Sets the delay between a toast appearing and starting to hide.
    #[must_use]
    pub fn with_dismiss_delay(mut self, delay: DismissDelay) -> Self {
        self.dismiss_delay = delay;
        self
    }

    #[must_use]
    pub fn default_content(&self) -> &str {
        &self.default_content
    }

    #[must_use]
    pub fn dismiss_delay(&self) -> DismissDelay {
        self.dismiss_delay
    }

    /// Opens a new toast at the bottom of the stack and shows it immediately.
    ///
    /// `None` uses the default content. The returned id can be ignored.
    pub fn open(&mut self, content: Option<String>, now: Instant) -> ToastId {
        let id = ToastId::from_raw(self.next_id);
        self.next_id += 1;

        let depth = self.active.len();
        let top_offset = stacking_offset(depth);
        let content = content.unwrap_or_else(|| self.default_content.clone());

        let mut toast = Toast::new(id, content, top_offset);
        toast.show(now);
        self.schedule
            .arm(id, now + self.dismiss_delay.as_duration());
        self.active.push(toast);

        tracing::debug!(id = id.raw(), depth, top_offset, "toast opened");
        id
    }

    /// Advances every toast to `now`.
    ///
    /// Fires due dismiss timers (`Visible → Hiding`) and then finishes every
    /// toast whose exit animation has completed. Returns the removed ids.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        for id in self.schedule.take_due(now) {
            if let Some(toast) = self.active.iter_mut().find(|t| t.id() == id) {
                if toast.hide(now) {
                    tracing::debug!(id = id.raw(), "toast hiding");
                }
            }
        }

        let finished: Vec<ToastId> = self
            .active
            .iter()
            .filter(|toast| toast.exit_finished(now))
            .map(Toast::id)
            .collect();

        finished
            .into_iter()
            .filter(|id| self.finish_exit(*id))
            .collect()
    }

    /// Exit animation finished: destroys the toast and removes it.
    ///
    /// Returns `true` if a hiding toast with this id was removed.
    pub fn finish_exit(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.active.iter().position(|t| t.id() == id) else {
            return false;
        };
        if !self.active[pos].destroy() {
            return false;
        }
        self.active.remove(pos);
        self.schedule.cancel(id);
        tracing::debug!(id = id.raw(), remaining = self.active.len(), "toast removed");
        true
    }

    /// Removes every toast and cancels every pending timer.
    pub fn clear(&mut self) {
        self.active.clear();
        self.schedule.clear();
    }

    /// Returns the active toasts in stacking order.
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.active.iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether ticks are still needed (something is visible or animating).
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.active.is_empty()
    }

    /// Pending dismiss timers.
    #[must_use]
    pub fn schedule(&self) -> &DismissSchedule {
        &self.schedule
    }
}
