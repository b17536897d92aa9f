// SPDX-License-Identifier: MPL-2.0
//! Demo preview blocks.
//!
//! A block pairs a live component example with its highlighted source. The
//! source sits in a collapsible panel (folded by default), and the toolbar
//! copies the raw source to the clipboard and raises a toast.
//!
//! # Components
//!
//! - [`panel`] - `CollapsiblePanel` fold state and height style
//! - [`block`] - `DemoPreviewBlock` state, messages and events
//! - [`layout`] - the three layout variants
//! - [`source`] - decoding of encoded demo fields
//! - [`highlight`] - highlighted markup parsing and measurement
//! - [`view`] - rendering

pub mod block;
pub mod highlight;
pub mod layout;
pub mod panel;
pub mod source;
pub mod view;

pub use block::{BlockText, Demo, DemoPreviewBlock, Event, Message, UpdateContext};
pub use highlight::SourceMarkup;
pub use layout::Layout;
pub use panel::{CollapsiblePanel, ContentNode, HeightStyle};
pub use view::ViewContext;
