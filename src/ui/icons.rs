// SPDX-License-Identifier: MPL-2.0
//! Centralized module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! are cached using `OnceLock`, so every call after the first only clones a
//! handle. All icons use `currentColor` and are tinted through the svg style.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `copy` not `copy_source`). See
//! [`action_icons`](super::action_icons) for the semantic mapping.

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    chevrons,
    "chevrons.svg",
    "Chevrons icon: two chevrons pointing away from each other."
);
define_icon!(
    code,
    "code.svg",
    "Code icon: angle brackets around a slash."
);
define_icon!(
    copy,
    "copy.svg",
    "Copy icon: two overlapping rounded sheets."
);
define_icon!(
    check_badge,
    "check_badge.svg",
    "Check badge icon: a checkmark inside a scalloped seal."
);

/// Sets a square size on an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_load_without_panicking() {
        let _ = chevrons();
        let _ = code();
        let _ = copy();
        let _ = check_badge();
    }

    #[test]
    fn embedded_icons_are_svg_documents() {
        for data in [
            include_str!("../../assets/icons/chevrons.svg"),
            include_str!("../../assets/icons/code.svg"),
            include_str!("../../assets/icons/copy.svg"),
            include_str!("../../assets/icons/check_badge.svg"),
        ] {
            assert!(data.trim_start().starts_with("<svg"));
            assert!(data.contains("currentColor"));
        }
    }
}
