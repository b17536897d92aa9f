// SPDX-License-Identifier: MPL-2.0
//! Semantic action icons mapping.
//!
//! This module provides a semantic layer over [`icons`](super::icons), mapping
//! user actions to their visual icon representations. This separation allows
//! changing an action's icon in one place without modifying all usage sites.
//!
//! Functions are named by **what action they represent**, not what they look like.

use super::icons;
use iced::widget::Svg;

/// Icons for the demo block toolbar.
pub mod demo {
    use super::{icons, Svg};

    /// Reveal the source panel (shown while folded).
    #[must_use]
    pub fn expand_source() -> Svg<'static> {
        icons::chevrons()
    }

    /// Hide the source panel (shown while expanded).
    #[must_use]
    pub fn collapse_source() -> Svg<'static> {
        icons::code()
    }

    /// Copy the raw source to the clipboard.
    #[must_use]
    pub fn copy_source() -> Svg<'static> {
        icons::copy()
    }
}

/// Icons for toast notifications.
pub mod notification {
    use super::{icons, Svg};

    /// Successful copy.
    #[must_use]
    pub fn success() -> Svg<'static> {
        icons::check_badge()
    }
}
