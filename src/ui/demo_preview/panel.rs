// SPDX-License-Identifier: MPL-2.0
//! Collapsible source panel.
//!
//! The panel keeps a boolean fold flag and, after every change, applies a
//! height style derived from the measured content height: `0px` when folded,
//! the measured height when expanded. The style is applied once on mount
//! (collapsed by default even though the content has a nonzero height) and
//! again each time the flag flips.
//!
//! Measurement happens when the style is applied. Expanding before the
//! content is mounted therefore yields `0px`.

use crate::config::FOLD_TRANSITION_MS;
use crate::ui::state::Transition;
use std::fmt;
use std::time::{Duration, Instant};

/// The measured content of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentNode {
    height: Option<f32>,
}

impl ContentNode {
    /// A node that has not been laid out yet.
    #[must_use]
    pub fn unmounted() -> Self {
        Self { height: None }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.height.is_some()
    }

    /// Reads the content height; `0.0` if not mounted.
    #[must_use]
    pub fn measure(&self) -> f32 {
        self.height.unwrap_or(0.0)
    }

    fn set(&mut self, height: f32) {
        self.height = Some(height.max(0.0));
    }
}

/// A pixel height style, displayed as e.g. `240px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightStyle(f32);

impl HeightStyle {
    #[must_use]
    pub fn px(value: f32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn pixels(self) -> f32 {
        self.0
    }
}

impl fmt::Display for HeightStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct CollapsiblePanel {
    folded: bool,
    content: ContentNode,
    style: Option<HeightStyle>,
    transition: Option<Transition>,
}

impl CollapsiblePanel {
    #[must_use]
    pub fn new(folded: bool) -> Self {
        Self {
            folded,
            content: ContentNode::unmounted(),
            style: None,
            transition: None,
        }
    }

    #[must_use]
    pub fn is_folded(&self) -> bool {
        self.folded
    }

    /// Live content height, `0.0` before mount.
    #[must_use]
    pub fn measured_height(&self) -> f32 {
        self.content.measure()
    }

    #[must_use]
    pub fn content(&self) -> ContentNode {
        self.content
    }

    /// Mounts the content with its laid-out height and applies the current
    /// fold state without animating.
    pub fn mount(&mut self, height: f32, now: Instant) {
        self.content.set(height);
        let style = self.apply();
        self.transition = Some(Transition::settled(style.pixels(), now));
    }

    /// Records a new content height. An expanded panel follows it at once.
    pub fn remeasure(&mut self, height: f32, now: Instant) {
        self.content.set(height);
        if !self.folded {
            let style = self.apply();
            self.transition = Some(Transition::settled(style.pixels(), now));
        }
    }

    /// Sets the fold flag. The height effect only runs on an actual change.
    ///
    /// Returns whether the flag changed.
    pub fn set_folded(&mut self, folded: bool, now: Instant) -> bool {
        if self.folded == folded {
            return false;
        }
        self.folded = folded;

        let previous = self.displayed_height(now).unwrap_or(0.0);
        let style = self.apply();
        let duration = Duration::from_millis(FOLD_TRANSITION_MS);
        self.transition = Some(
            self.transition
                .unwrap_or_else(|| Transition::settled(previous, now))
                .retarget(style.pixels(), now, duration),
        );

        tracing::debug!(folded, height = %style, "source panel fold changed");
        true
    }

    /// Flips the fold flag.
    pub fn toggle(&mut self, now: Instant) {
        self.set_folded(!self.folded, now);
    }

    /// The applied height style; `None` until the first effect has run.
    #[must_use]
    pub fn height_style(&self) -> Option<HeightStyle> {
        self.style
    }

    /// Height to render at `now`, eased towards the applied style.
    #[must_use]
    pub fn displayed_height(&self, now: Instant) -> Option<f32> {
        self.transition.map(|transition| transition.value(now))
    }

    /// Whether the height is still moving.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition
            .is_some_and(|transition| !transition.is_finished(now))
    }

    fn apply(&mut self) -> HeightStyle {
        let style = if self.folded {
            HeightStyle::px(0.0)
        } else {
            HeightStyle::px(self.content.measure())
        };
        self.style = Some(style);
        style
    }
}

impl Default for CollapsiblePanel {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_START_FOLDED)
    }
}
