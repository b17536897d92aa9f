// SPDX-License-Identifier: MPL-2.0
//! `demo_preview` renders live component examples next to their highlighted
//! source, built with the Iced GUI framework.
//!
//! Each demo block shows a live example, a collapsible source panel and a
//! copy action that writes the raw source to the clipboard and raises a
//! stacked, self-dismissing toast.

#![doc(html_root_url = "https://docs.rs/demo_preview/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
