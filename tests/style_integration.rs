// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use demo_preview::ui::design_tokens::{palette, sizing, spacing};
    use demo_preview::ui::styles::{button, container, ButtonKind, ButtonShape};
    use demo_preview::ui::theming::ThemeMode;
    use iced::Theme;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        for kind in ButtonKind::ALL {
            for (plain, round) in [(false, false), (true, false), (false, true)] {
                let style = button::showcase(kind, ButtonShape { plain, round });
                let _ = style(&theme, iced::widget::button::Status::Active);
                let _ = style(&theme, iced::widget::button::Status::Disabled);
            }
        }
        let _ = button::icon_action(&theme, iced::widget::button::Status::Hovered);
    }

    #[test]
    fn container_styles_follow_theme() {
        let light = container::card(&Theme::Light);
        let dark = container::card(&Theme::Dark);
        assert_ne!(light.background, dark.background);

        let _ = container::split_line(&Theme::Light);
        let _ = container::source_panel(&Theme::Dark);
    }

    #[test]
    fn toast_style_fades_with_presence() {
        let hidden = container::toast(0.0)(&Theme::Light);
        let shown = container::toast(1.0)(&Theme::Light);
        assert_ne!(hidden.background, shown.background);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = palette::SUCCESS_500;
        let _ = spacing::MD;
        let _ = sizing::ICON_SM;
    }

    #[test]
    fn toast_tokens_match_stack_geometry() {
        assert!((sizing::TOAST_HEIGHT - 42.0).abs() < f32::EPSILON);
        assert!((sizing::TOAST_GAP - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(ThemeMode::Light.to_iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_iced_theme(), Theme::Dark);
    }
}
