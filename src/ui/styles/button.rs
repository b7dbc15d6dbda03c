// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, GRAY_900},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (form submit). Disabled while a request is in flight.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Active | button::Status::Pressed => (palette::PRIMARY_500, shadow::NONE),
        button::Status::Hovered => (palette::PRIMARY_700, shadow::SM),
        button::Status::Disabled => (
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            },
            shadow::NONE,
        ),
    };
    // The translucent fill would swallow a dark label on dark themes.
    let text_color = if matches!(status, button::Status::Disabled) && !matches!(theme, Theme::Light) {
        palette::GRAY_700
    } else {
        GRAY_900
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Text-only navigation link ("Create account", "Back to login").
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base.text;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        button::Status::Active => base,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base
        },
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_brand_color() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn disabled_primary_is_translucent() {
        let style = primary(&Theme::Dark, button::Status::Disabled);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn link_highlights_on_hover() {
        let style = link(&Theme::Dark, button::Status::Hovered);
        assert_eq!(style.text_color, palette::PRIMARY_500);
        assert!(style.background.is_none());
    }
}
