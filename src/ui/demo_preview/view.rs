// SPDX-License-Identifier: MPL-2.0
//! Demo block rendering.

use super::block::{DemoPreviewBlock, Message};
use super::highlight::SourceMarkup;
use super::layout::{Action, Layout};
use crate::catalog::live;
use crate::i18n::I18n;
use crate::ui::action_icons;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::text::Span;
use iced::widget::{
    button, container, rich_text, span, svg, Column, Container, Row, Space, Text, Tooltip,
};
use iced::{alignment, font, Element, Font, Length, Theme};
use std::time::Instant;

/// Read-only inputs shared by every block view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub now: Instant,
    pub dark_theme: bool,
}

pub fn view<'a>(block: &'a DemoPreviewBlock, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let default_title = ctx.i18n.tr("demo-default-title");
    let default_description = ctx.i18n.tr("demo-default-description");
    let text = block.text(&default_title, &default_description);

    let title = text.title.map(title_text);
    let description = text.description.map(description_text);
    let split = text.split_line.then(split_line);

    let content: Element<'a, Message> = match block.layout() {
        Layout::Titled => {
            let mut section = Column::new()
                .spacing(spacing::XS)
                .padding([spacing::SM, spacing::LG]);
            for item in [title, description, split].into_iter().flatten() {
                section = section.push(item);
            }
            Column::new()
                .push(preview(block, ctx))
                .push(section.push(toolbar(block, ctx)))
                .push(source(block, ctx))
                .into()
        }
        Layout::Minimal => Column::new()
            .push(preview(block, ctx))
            .push(split_line())
            .push(Container::new(toolbar(block, ctx)).padding([spacing::XS, spacing::LG]))
            .push(source(block, ctx))
            .into(),
        Layout::Header => {
            let heading = match title {
                Some(title) => title,
                None => Space::new().into(),
            };
            let header = Row::new()
                .align_y(alignment::Vertical::Center)
                .push(Container::new(heading).width(Length::Fill))
                .push(toolbar(block, ctx));

            let mut section = Column::new()
                .spacing(spacing::XS)
                .padding([spacing::SM, spacing::LG])
                .push(header);
            if let Some(description) = description {
                section = section.push(description);
            }
            Column::new()
                .push(section)
                .push(preview(block, ctx))
                .push(source(block, ctx))
                .into()
        }
    };

    Container::new(content)
        .max_width(sizing::BLOCK_MAX_WIDTH)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn title_text<'a>(title: &str) -> Element<'a, Message> {
    Text::new(title.to_string())
        .size(typography::TITLE_SM)
        .font(Font {
            weight: font::Weight::Semibold,
            ..Font::DEFAULT
        })
        .into()
}

fn description_text<'a>(description: &str) -> Element<'a, Message> {
    Text::new(description.to_string())
        .size(typography::BODY)
        .into()
}

fn split_line<'a>() -> Element<'a, Message> {
    Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SPLIT_LINE))
        .style(styles::container::split_line)
        .into()
}

/// Live example, behind the deferred-mount boundary.
fn preview<'a>(block: &'a DemoPreviewBlock, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let example = block.demo().example.as_str();
    let content: Element<'a, Message> = if !block.is_mounted() {
        Text::new(ctx.i18n.tr("demo-loading"))
            .size(typography::BODY_SM)
            .into()
    } else if let Some(example) = live::view(example, ctx.i18n) {
        example.map(Message::Example)
    } else {
        Text::new(ctx.i18n.tr_with_args("demo-missing-example", &[("name", example)]))
            .size(typography::BODY_SM)
            .into()
    };

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn action_button<'a>(
    icon: svg::Svg<'static>,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    let icon = icons::sized(icon, sizing::ICON_SM).style(|theme: &Theme, status| svg::Style {
        color: Some(match status {
            svg::Status::Hovered => palette::PRIMARY_500,
            svg::Status::Idle => theme.palette().text,
        }),
    });

    Tooltip::new(
        button(icon)
            .on_press(message)
            .padding(spacing::XXS)
            .style(styles::button::icon_action),
        Text::new(label).size(typography::CAPTION),
        iced::widget::tooltip::Position::Top,
    )
    .into()
}

fn toolbar<'a>(block: &'a DemoPreviewBlock, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let folded = block.panel().is_folded();

    let buttons = block.layout().actions().into_iter().map(|action| match action {
        Action::Fold if folded => action_button(
            action_icons::demo::expand_source(),
            ctx.i18n.tr("demo-action-expand"),
            Message::SetFolded(false),
        ),
        Action::Fold => action_button(
            action_icons::demo::collapse_source(),
            ctx.i18n.tr("demo-action-collapse"),
            Message::SetFolded(true),
        ),
        Action::Copy => action_button(
            action_icons::demo::copy_source(),
            ctx.i18n.tr("demo-action-copy"),
            Message::Copy,
        ),
    });

    Container::new(Row::with_children(buttons).spacing(spacing::XS))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .into()
}

/// Highlighted source lines at a fixed line height.
pub fn source_lines<'a, M: 'a>(markup: &'a SourceMarkup, dark_theme: bool) -> Element<'a, M> {
    let lines = markup.lines().iter().map(|line| {
        let spans: Vec<Span<'a, (), Font>> = line
            .segments
            .iter()
            .map(|segment| {
                span(segment.text.as_str())
                    .color_maybe(segment.color(dark_theme))
                    .font(Font::MONOSPACE)
            })
            .collect();

        Container::new(rich_text(spans).size(typography::CODE))
            .height(Length::Fixed(sizing::CODE_LINE_HEIGHT))
            .align_y(alignment::Vertical::Center)
            .into()
    });

    Column::with_children(lines).into()
}

/// Collapsible source panel at its current displayed height.
fn source<'a>(block: &'a DemoPreviewBlock, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let panel = block.panel();
    let height = match panel.displayed_height(ctx.now) {
        Some(height) => Length::Fixed(height),
        None if panel.is_folded() => Length::Fixed(0.0),
        None => Length::Shrink,
    };

    let code = Container::new(source_lines(&block.demo().markup, ctx.dark_theme))
        .width(Length::Fill)
        .padding(sizing::CODE_PADDING);

    container(code)
        .width(Length::Fill)
        .height(height)
        .clip(true)
        .style(styles::container::source_panel)
        .into()
}
