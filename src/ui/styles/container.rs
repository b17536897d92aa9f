// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn divider_color(theme: &Theme) -> Color {
    let text = theme.extended_palette().background.base.text;
    Color {
        a: opacity::OVERLAY_SUBTLE / 2.0,
        ..text
    }
}

/// Outer frame of a demo block.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: divider_color(theme),
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Thin horizontal rule between block sections.
pub fn split_line(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(divider_color(theme))),
        ..Default::default()
    }
}

/// Background of the collapsible source panel.
///
/// The color is derived from the active theme background with a slight
/// tint so code stays readable in both light and dark modes.
pub fn source_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Success toast surface, faded by `presence` (`0.0` hidden, `1.0` shown).
pub fn toast(presence: f32) -> impl Fn(&Theme) -> container::Style {
    let alpha = presence.clamp(0.0, 1.0);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::SUCCESS_100
        })),
        border: Border {
            color: Color {
                a: alpha * opacity::OVERLAY_MEDIUM,
                ..palette::SUCCESS_500
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: if alpha > 0.0 { shadow::SM } else { shadow::NONE },
        text_color: Some(Color {
            a: alpha,
            ..palette::SUCCESS_500
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_alpha_follows_presence() {
        let half = toast(0.5)(&Theme::Light);
        assert_eq!(
            half.text_color.map(|c| c.a),
            Some(0.5),
            "text should fade with the toast"
        );

        let hidden = toast(-1.0)(&Theme::Light);
        assert_eq!(hidden.text_color.map(|c| c.a), Some(0.0));
        assert_eq!(hidden.shadow, shadow::NONE);
    }

    #[test]
    fn card_has_visible_border() {
        let style = card(&Theme::Dark);
        assert!(style.border.width > 0.0);
        assert!(style.background.is_some());
    }

    #[test]
    fn split_line_is_filled() {
        assert!(split_line(&Theme::Light).background.is_some());
    }
}
