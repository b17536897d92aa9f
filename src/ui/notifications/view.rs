// SPDX-License-Identifier: MPL-2.0
//! Toast overlay rendering.
//!
//! Each toast is a small success card centered horizontally at its fixed
//! `top_offset`. Cards slide down and fade in while entering, and slide up
//! and fade out while hiding.

use super::registry::ToastRegistry;
use super::toast::Toast;
use crate::ui::action_icons;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{container, svg, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Instant;

/// Vertical shift applied to a toast that is `presence` visible.
#[must_use]
pub fn slide_offset(presence: f32) -> f32 {
    -sizing::TOAST_SLIDE * (1.0 - presence.clamp(0.0, 1.0))
}

/// Renders one toast card.
pub fn toast<'a, Message: 'a>(toast: &'a Toast, now: Instant) -> Element<'a, Message> {
    let presence = toast.presence(now);

    let icon = icons::sized(action_icons::notification::success(), sizing::ICON_SM).style(
        move |_theme: &Theme, _status| svg::Style {
            color: Some(Color {
                a: presence,
                ..palette::SUCCESS_500
            }),
        },
    );

    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(Text::new(toast.content()).size(typography::BODY));

    Container::new(content)
        .height(Length::Fixed(sizing::TOAST_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::toast(presence))
        .into()
}

/// Renders every active toast as a layer at its stacking offset.
///
/// Returns an empty shrink container when no toast is active so the overlay
/// never captures space or input.
pub fn overlay<'a, Message: 'a>(
    registry: &'a ToastRegistry,
    now: Instant,
) -> Element<'a, Message> {
    if registry.is_empty() {
        return Container::new(Text::new(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    registry
        .active()
        .fold(Stack::new(), |stack, item| {
            let top = (item.top_offset() + slide_offset(item.presence(now))).max(0.0);
            stack.push(
                container(self::toast(item, now))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .padding(Padding {
                        top,
                        right: 0.0,
                        bottom: 0.0,
                        left: 0.0,
                    }),
            )
        })
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_present_toast_is_not_shifted() {
        assert_eq!(slide_offset(1.0), 0.0);
    }

    #[test]
    fn hidden_toast_sits_one_slide_above() {
        assert_eq!(slide_offset(0.0), -sizing::TOAST_SLIDE);
        assert_eq!(slide_offset(-3.0), -sizing::TOAST_SLIDE);
    }

    #[test]
    fn overlay_renders_for_empty_and_populated_registries() {
        let now = Instant::now();
        let mut registry = ToastRegistry::new("Copied!");
        let empty: Element<'_, ()> = overlay(&registry, now);
        drop(empty);

        registry.open(None, now);
        registry.open(None, now);
        let _populated: Element<'_, ()> = overlay(&registry, now);
    }
}
