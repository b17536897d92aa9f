// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss delay and slide-fade transition lengths
//! - **Preview**: Source panel fold behavior and transition length
//! - **Frame**: Animation tick rate

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default delay before a visible toast starts hiding (in milliseconds).
pub const DEFAULT_TOAST_DISMISS_MS: u64 = 3000;

/// Minimum configurable toast dismiss delay (in milliseconds).
pub const MIN_TOAST_DISMISS_MS: u64 = 500;

/// Maximum configurable toast dismiss delay (in milliseconds).
pub const MAX_TOAST_DISMISS_MS: u64 = 30_000;

/// Length of the toast slide-in animation (in milliseconds).
pub const TOAST_ENTER_MS: u64 = 200;

/// Length of the toast slide-out animation (in milliseconds).
/// The toast is destroyed once this animation completes.
pub const TOAST_EXIT_MS: u64 = 300;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Source panels start collapsed.
pub const DEFAULT_START_FOLDED: bool = true;

/// Length of the source panel height transition (in milliseconds).
pub const FOLD_TRANSITION_MS: u64 = 250;

// ==========================================================================
// Frame Defaults
// ==========================================================================

/// Interval between animation ticks while something is moving (in milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DISMISS_MS > 0);
    assert!(MAX_TOAST_DISMISS_MS >= MIN_TOAST_DISMISS_MS);
    assert!(DEFAULT_TOAST_DISMISS_MS >= MIN_TOAST_DISMISS_MS);
    assert!(DEFAULT_TOAST_DISMISS_MS <= MAX_TOAST_DISMISS_MS);

    // A toast must be fully shown before its dismiss timer can fire.
    assert!(TOAST_ENTER_MS < MIN_TOAST_DISMISS_MS);
    assert!(TOAST_EXIT_MS > 0);

    assert!(FOLD_TRANSITION_MS > 0);
    assert!(FRAME_INTERVAL_MS > 0);
    assert!(FRAME_INTERVAL_MS < TOAST_ENTER_MS);
};
