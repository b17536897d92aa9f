// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`demo_preview`] - Demo blocks with live example, source panel and toolbar
//! - [`notifications`] - Stacked copy toasts
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Small validated values and animation progress
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering (visual primitives)
//! - [`action_icons`] - Semantic action-to-icon mapping

pub mod action_icons;
pub mod demo_preview;
pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
