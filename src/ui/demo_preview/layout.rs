// SPDX-License-Identifier: MPL-2.0
//! Block layout variants.
//!
//! The three variants share one state machine and differ only in which
//! optional fields are rendered and where the toolbar sits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Preview, then a description section (title, description, split line,
    /// fold and copy buttons), then the source panel.
    #[default]
    Titled,
    /// Preview, split line and a right-aligned toolbar, then the source panel.
    Minimal,
    /// Header row (title, copy and fold buttons), description, preview, then
    /// the source panel.
    Header,
}

/// Position of a toolbar action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Copy,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Titled, Layout::Minimal, Layout::Header];

    /// Toolbar actions in display order.
    #[must_use]
    pub fn actions(self) -> [Action; 2] {
        match self {
            Layout::Titled | Layout::Minimal => [Action::Fold, Action::Copy],
            Layout::Header => [Action::Copy, Action::Fold],
        }
    }

    /// Whether the title and description fields are rendered at all.
    #[must_use]
    pub fn shows_text(self) -> bool {
        !matches!(self, Layout::Minimal)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Titled => "titled",
            Layout::Minimal => "minimal",
            Layout::Header => "header",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown layout name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutError(pub String);

impl fmt::Display for ParseLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown layout '{}' (expected titled, minimal or header)",
            self.0
        )
    }
}

impl std::error::Error for ParseLayoutError {}

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLayoutError(s.to_string()))
    }
}
