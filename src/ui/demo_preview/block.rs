// SPDX-License-Identifier: MPL-2.0
//! One documentation example: a live preview, its highlighted source in a
//! collapsible panel, and fold and copy actions.
//!
//! The block follows the "state down, messages up" pattern: `update` mutates
//! local state and the injected toast registry, and returns an [`Event`] for
//! effects the application root performs (writing to the clipboard).

use super::highlight::SourceMarkup;
use super::layout::Layout;
use super::panel::CollapsiblePanel;
use crate::catalog::live;
use crate::ui::notifications::ToastRegistry;
use std::time::Instant;

/// Content of a demo block.
#[derive(Debug, Clone, PartialEq)]
pub struct Demo {
    /// `None` shows the default title, an empty string hides it.
    pub title: Option<String>,
    /// `None` shows the default description, an empty string hides it.
    pub description: Option<String>,
    /// Raw source, copied verbatim to the clipboard.
    pub source: String,
    /// Highlighted source shown in the panel.
    pub markup: SourceMarkup,
    /// Key of the live example to render.
    pub example: String,
}

impl Demo {
    /// A demo whose panel shows `source` without highlighting.
    #[must_use]
    pub fn plain(example: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            title: None,
            description: None,
            markup: SourceMarkup::plain(&source),
            source,
            example: example.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleFold,
    SetFolded(bool),
    Copy,
    Example(live::Message),
}

/// Effects requested from the application root.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    CopyToClipboard(String),
}

/// What `update` may touch outside the block.
pub struct UpdateContext<'a> {
    pub toasts: &'a mut ToastRegistry,
    pub now: Instant,
}

/// Resolved text fields for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockText<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub split_line: bool,
}

fn resolve<'a>(field: Option<&'a str>, default: &'a str) -> Option<&'a str> {
    match field {
        None => Some(default),
        Some("") => None,
        Some(text) => Some(text),
    }
}

#[derive(Debug, Clone)]
pub struct DemoPreviewBlock {
    demo: Demo,
    layout: Layout,
    panel: CollapsiblePanel,
    mounted: bool,
}

impl DemoPreviewBlock {
    #[must_use]
    pub fn new(demo: Demo, layout: Layout, start_folded: bool) -> Self {
        Self {
            demo,
            layout,
            panel: CollapsiblePanel::new(start_folded),
            mounted: false,
        }
    }

    /// Crosses the deferred-mount boundary: the live example becomes
    /// interactive and the source panel is measured and styled.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.panel.mount(self.demo.markup.measured_height(), now);
    }

    pub fn update(&mut self, message: Message, ctx: UpdateContext<'_>) -> Event {
        match message {
            Message::ToggleFold => {
                self.panel.toggle(ctx.now);
                Event::None
            }
            Message::SetFolded(folded) => {
                self.panel.set_folded(folded, ctx.now);
                Event::None
            }
            Message::Copy => {
                ctx.toasts.open(None, ctx.now);
                tracing::info!(
                    example = %self.demo.example,
                    bytes = self.demo.source.len(),
                    "source copy requested"
                );
                Event::CopyToClipboard(self.demo.source.clone())
            }
            Message::Example(message) => {
                tracing::debug!(example = %self.demo.example, ?message, "live example interaction");
                Event::None
            }
        }
    }

    /// Title, description and split-line visibility for the current layout.
    #[must_use]
    pub fn text<'a>(
        &'a self,
        default_title: &'a str,
        default_description: &'a str,
    ) -> BlockText<'a> {
        if !self.layout.shows_text() {
            return BlockText {
                title: None,
                description: None,
                split_line: true,
            };
        }
        let title = resolve(self.demo.title.as_deref(), default_title);
        let description = resolve(self.demo.description.as_deref(), default_description);
        // The header row already separates the text from the example.
        let split_line = match self.layout {
            Layout::Header => false,
            Layout::Titled | Layout::Minimal => description.is_some() || title.is_none(),
        };
        BlockText {
            title,
            description,
            split_line,
        }
    }

    #[must_use]
    pub fn demo(&self) -> &Demo {
        &self.demo
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn panel(&self) -> &CollapsiblePanel {
        &self.panel
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the block still needs frame ticks.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.panel.is_animating(now)
    }
}
