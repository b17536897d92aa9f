// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for copy feedback.
//!
//! Toasts appear near the top of the window, stacked one below the other in
//! the order they were opened. Each one hides on its own after the configured
//! delay and is removed once its exit animation has played.
//!
//! # Components
//!
//! - [`toast`] - `Toast` and its `Created → Visible → Hiding → Destroyed` lifecycle
//! - [`schedule`] - `DismissSchedule`, the cancellable per-toast hide timers
//! - [`registry`] - `ToastRegistry`, the ordered set of active toasts
//! - [`view`] - overlay rendering
//!
//! # Usage
//!
//! ```
//! use demo_preview::ui::notifications::ToastRegistry;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut toasts = ToastRegistry::new("Copied!");
//! toasts.open(None, start);
//! toasts.open(Some("Copied again".into()), start);
//! assert_eq!(toasts.len(), 2);
//!
//! // Drive the registry from a frame tick.
//! toasts.tick(start + Duration::from_secs(3));
//! toasts.tick(start + Duration::from_secs(4));
//! assert!(toasts.is_empty());
//! ```

pub mod registry;
pub mod schedule;
pub mod toast;
pub mod view;

pub use registry::{stacking_offset, ToastRegistry};
pub use schedule::DismissSchedule;
pub use toast::{Phase, Toast, ToastId};
