// SPDX-License-Identifier: MPL-2.0
//! A single transient notification and its lifecycle.
//!
//! ```text
//! Created ──show──▶ Visible ──hide──▶ Hiding ──destroy──▶ Destroyed
//! ```
//!
//! `show` happens in the same call that creates the toast. `hide` is fired by
//! the dismiss timer. `destroy` is fired once the exit animation has finished.
//! Any other transition is ignored.

use crate::config::{TOAST_ENTER_MS, TOAST_EXIT_MS};
use crate::ui::state::transition;
use std::time::{Duration, Instant};

/// Identity of a toast within its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Wraps a raw counter value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Visible { since: Instant },
    Hiding { since: Instant },
    Destroyed,
}

/// A toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    content: String,
    /// Pixels from the top of the window, fixed at creation.
    top_offset: f32,
    phase: Phase,
}

impl Toast {
    /// Creates a toast in the `Created` phase.
    #[must_use]
    pub fn new(id: ToastId, content: impl Into<String>, top_offset: f32) -> Self {
        Self {
            id,
            content: content.into(),
            top_offset,
            phase: Phase::Created,
        }
    }

    /// `Created → Visible`.
    pub fn show(&mut self, now: Instant) -> bool {
        if self.phase == Phase::Created {
            self.phase = Phase::Visible { since: now };
            true
        } else {
            false
        }
    }

    /// `Visible → Hiding`.
    pub fn hide(&mut self, now: Instant) -> bool {
        if let Phase::Visible { .. } = self.phase {
            self.phase = Phase::Hiding { since: now };
            true
        } else {
            false
        }
    }

    /// `Hiding → Destroyed`.
    pub fn destroy(&mut self) -> bool {
        if let Phase::Hiding { .. } = self.phase {
            self.phase = Phase::Destroyed;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn top_offset(&self) -> f32 {
        self.top_offset
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the toast is shown and not yet leaving.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible { .. })
    }

    #[must_use]
    pub fn is_hiding(&self) -> bool {
        matches!(self.phase, Phase::Hiding { .. })
    }

    /// Slide-in progress in `0.0..=1.0`; `1.0` once past the enter animation.
    #[must_use]
    pub fn enter_progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Created => 0.0,
            Phase::Visible { since } => {
                transition::progress(since, Duration::from_millis(TOAST_ENTER_MS), now)
            }
            Phase::Hiding { .. } | Phase::Destroyed => 1.0,
        }
    }

    /// Slide-out progress in `0.0..=1.0`; `0.0` until hiding starts.
    #[must_use]
    pub fn exit_progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Created | Phase::Visible { .. } => 0.0,
            Phase::Hiding { since } => {
                transition::progress(since, Duration::from_millis(TOAST_EXIT_MS), now)
            }
            Phase::Destroyed => 1.0,
        }
    }

    /// Whether the exit animation has run to completion.
    #[must_use]
    pub fn exit_finished(&self, now: Instant) -> bool {
        self.is_hiding() && self.exit_progress(now) >= 1.0
    }

    /// Combined visibility used for rendering (`0.0` hidden, `1.0` fully shown).
    #[must_use]
    pub fn presence(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Hiding { .. } => 1.0 - self.exit_progress(now),
            _ => self.enter_progress(now),
        }
    }
}
