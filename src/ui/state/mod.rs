// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Small, validated value types shared by the notification and preview
//! components.

pub mod dismiss_delay;
pub mod transition;

pub use dismiss_delay::DismissDelay;
pub use transition::Transition;
