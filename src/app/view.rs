// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the scrollable list of demo blocks with the toast overlay stacked
//! on top.

use super::Message;
use crate::i18n::I18n;
use crate::ui::demo_preview::{self, DemoPreviewBlock};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, ToastRegistry};
use iced::widget::{Column, Container, Scrollable, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub blocks: &'a [DemoPreviewBlock],
    pub toasts: &'a ToastRegistry,
    pub now: Instant,
    pub dark_theme: bool,
}

/// Renders the demo list and the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let block_ctx = demo_preview::ViewContext {
        i18n: ctx.i18n,
        now: ctx.now,
        dark_theme: ctx.dark_theme,
    };

    let content: Element<'_, Message> = if ctx.blocks.is_empty() {
        Container::new(Text::new(ctx.i18n.tr("demo-empty-catalog")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    } else {
        let blocks = ctx.blocks.iter().enumerate().map(|(index, block)| {
            demo_preview::view::view(block, &block_ctx)
                .map(move |message| Message::Demo(index, message))
        });

        Scrollable::new(
            Container::new(Column::with_children(blocks).spacing(spacing::XL))
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    };

    Stack::new()
        .push(content)
        .push(notifications::view::overlay(ctx.toasts, ctx.now))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
