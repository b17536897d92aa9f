// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};
use serde::{Deserialize, Serialize};

/// Semantic color of a showcased button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Default,
    Primary,
    Success,
    Info,
    Warning,
    Danger,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 6] = [
        ButtonKind::Default,
        ButtonKind::Primary,
        ButtonKind::Success,
        ButtonKind::Info,
        ButtonKind::Warning,
        ButtonKind::Danger,
    ];

    /// Returns `(accent, light tint)`; `None` for the neutral kind.
    fn colors(self) -> Option<(Color, Color)> {
        match self {
            ButtonKind::Default => None,
            ButtonKind::Primary => Some((palette::PRIMARY_500, palette::PRIMARY_100)),
            ButtonKind::Success => Some((palette::SUCCESS_500, palette::SUCCESS_100)),
            ButtonKind::Info => Some((palette::INFO_500, palette::INFO_100)),
            ButtonKind::Warning => Some((palette::WARNING_500, palette::WARNING_100)),
            ButtonKind::Danger => Some((palette::DANGER_500, palette::DANGER_100)),
        }
    }
}

/// Fill and shape of a showcased button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonShape {
    /// Tinted background with accent text instead of a solid fill.
    pub plain: bool,
    /// Pill-shaped corners.
    pub round: bool,
}

fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: color.r + (1.0 - color.r) * amount,
        g: color.g + (1.0 - color.g) * amount,
        b: color.b + (1.0 - color.b) * amount,
        a: color.a,
    }
}

/// Style for the buttons rendered inside live examples.
pub fn showcase(
    kind: ButtonKind,
    shape: ButtonShape,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let corner = if shape.round { radius::FULL } else { radius::SM };
        let hovered = matches!(status, button::Status::Hovered);
        let pressed = matches!(status, button::Status::Pressed);

        let (background, text_color, border_color) = match kind.colors() {
            None => {
                let base = theme.extended_palette().background.base;
                let border = if hovered || pressed {
                    palette::PRIMARY_400
                } else {
                    palette::GRAY_200
                };
                let text = if hovered || pressed {
                    palette::PRIMARY_500
                } else {
                    base.text
                };
                (base.color, text, border)
            }
            Some((accent, tint)) if shape.plain => {
                if hovered || pressed {
                    (accent, WHITE, accent)
                } else {
                    (tint, accent, lighten(accent, 0.5))
                }
            }
            Some((accent, _)) => {
                let fill = if pressed {
                    Color {
                        a: opacity::OVERLAY_PRESSED,
                        ..accent
                    }
                } else if hovered {
                    lighten(accent, 0.2)
                } else {
                    accent
                };
                (fill, WHITE, fill)
            }
        };

        let mut style = button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: corner.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        };

        if matches!(status, button::Status::Disabled) {
            style.text_color = Color {
                a: opacity::OVERLAY_MEDIUM,
                ..style.text_color
            };
        }
        style
    }
}

/// Style for the icon-only toolbar actions of a demo block.
pub fn icon_action(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base.text
        },
        button::Status::Active => Color {
            a: opacity::OVERLAY_STRONG,
            ..base.text
        },
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_kinds_use_white_text_on_accent() {
        let style = showcase(ButtonKind::Primary, ButtonShape::default())(
            &Theme::Light,
            button::Status::Active,
        );
        assert_eq!(style.text_color, WHITE);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn plain_kinds_use_tint_until_hovered() {
        let shape = ButtonShape {
            plain: true,
            round: false,
        };
        let style = showcase(ButtonKind::Danger, shape);

        let active = style(&Theme::Light, button::Status::Active);
        assert_eq!(active.text_color, palette::DANGER_500);
        assert_eq!(
            active.background,
            Some(Background::Color(palette::DANGER_100))
        );

        let hovered = style(&Theme::Light, button::Status::Hovered);
        assert_eq!(hovered.text_color, WHITE);
    }

    #[test]
    fn round_shape_uses_pill_radius() {
        let shape = ButtonShape {
            plain: false,
            round: true,
        };
        let style = showcase(ButtonKind::Success, shape)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.radius, iced::border::Radius::from(radius::FULL));
    }

    #[test]
    fn icon_action_highlights_on_hover() {
        let hovered = icon_action(&Theme::Light, button::Status::Hovered);
        assert_eq!(hovered.text_color, palette::PRIMARY_500);
        assert!(hovered.background.is_none());
    }

    #[test]
    fn kind_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: ButtonKind,
        }
        let parsed: Wrapper = toml::from_str("kind = \"warning\"").expect("parse");
        assert_eq!(parsed.kind, ButtonKind::Warning);
    }
}
