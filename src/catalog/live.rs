// SPDX-License-Identifier: MPL-2.0
//! Live examples of the component library.
//!
//! Each example is rendered by key; the key is the `component` field of a
//! demo file.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button::{self as button_style, ButtonKind, ButtonShape};
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Padding};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed(ButtonKind),
}

/// Every key that renders a live example.
pub const KEYS: [&str; 5] = [
    "button-basic",
    "button-plain",
    "button-round",
    "button-disabled",
    "button-size",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Size {
    Large,
    Default,
    Small,
}

impl Size {
    fn padding(self) -> Padding {
        match self {
            Size::Large => Padding::from([spacing::SM, spacing::LG]),
            Size::Default => Padding::from([spacing::XS, spacing::MD]),
            Size::Small => Padding::from([spacing::XXS, spacing::SM]),
        }
    }

    fn text_size(self) -> f32 {
        match self {
            Size::Large => typography::BODY_LG,
            Size::Default => typography::BODY,
            Size::Small => typography::CAPTION,
        }
    }
}

fn label_key(kind: ButtonKind) -> &'static str {
    match kind {
        ButtonKind::Default => "button-default",
        ButtonKind::Primary => "button-primary",
        ButtonKind::Success => "button-success",
        ButtonKind::Info => "button-info",
        ButtonKind::Warning => "button-warning",
        ButtonKind::Danger => "button-danger",
    }
}

fn showcase_button<'a>(
    label: String,
    kind: ButtonKind,
    shape: ButtonShape,
    size: Size,
    enabled: bool,
) -> Element<'a, Message> {
    button(Text::new(label).size(size.text_size()))
        .padding(size.padding())
        .style(button_style::showcase(kind, shape))
        .on_press_maybe(enabled.then_some(Message::Pressed(kind)))
        .into()
}

fn kinds_row<'a>(i18n: &I18n, shape: ButtonShape, enabled: bool) -> Element<'a, Message> {
    ButtonKind::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::SM), |row, kind| {
            row.push(showcase_button(
                i18n.tr(label_key(kind)),
                kind,
                shape,
                Size::Default,
                enabled,
            ))
        })
        .into()
}

/// Renders the live example registered under `key`.
pub fn view<'a>(key: &str, i18n: &I18n) -> Option<Element<'a, Message>> {
    let plain = ButtonShape {
        plain: true,
        round: false,
    };
    let round = ButtonShape {
        plain: false,
        round: true,
    };

    let element = match key {
        "button-basic" => Column::new()
            .spacing(spacing::MD)
            .push(kinds_row(i18n, ButtonShape::default(), true))
            .push(kinds_row(i18n, plain, true))
            .into(),
        "button-plain" => kinds_row(i18n, plain, true),
        "button-round" => kinds_row(i18n, round, true),
        "button-disabled" => Column::new()
            .spacing(spacing::MD)
            .push(kinds_row(i18n, ButtonShape::default(), false))
            .push(kinds_row(i18n, plain, false))
            .into(),
        "button-size" => [
            (Size::Large, "button-large"),
            (Size::Default, "button-default"),
            (Size::Small, "button-small"),
        ]
        .into_iter()
        .fold(
            Row::new()
                .spacing(spacing::SM)
                .height(sizing::BUTTON_HEIGHT + spacing::MD)
                .align_y(iced::alignment::Vertical::Center),
            |row, (size, label)| {
                row.push(showcase_button(
                    i18n.tr(label),
                    ButtonKind::Primary,
                    ButtonShape::default(),
                    size,
                    true,
                ))
            },
        )
        .into(),
        _ => return None,
    };
    Some(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_renders() {
        let i18n = I18n::default();
        for key in KEYS {
            assert!(view(key, &i18n).is_some(), "{key} should render");
        }
    }

    #[test]
    fn unknown_key_renders_nothing() {
        let i18n = I18n::default();
        assert!(view("el-slider", &i18n).is_none());
    }

    #[test]
    fn every_kind_has_a_translated_label() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        for kind in ButtonKind::ALL {
            assert!(!i18n.tr(label_key(kind)).starts_with("MISSING"));
        }
    }
}
