// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent bar, a title, an optional
//! description and a dismiss button. The overlay stacks them in the top-right
//! corner and slides each one horizontally by its current animation offset.

use super::notification::{Toast, ToastId};
use super::transition::ToastLayer;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, float, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme, Vector};
use std::time::Instant;

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user clicked the close button of a toast.
    Dismiss(ToastId),
}

/// Renders a single toast card.
pub fn view(toast: &Toast) -> Element<'_, Message> {
    let accent_color = toast.kind().color();

    let accent_bar = Container::new(text(""))
        .width(Length::Fixed(sizing::TOAST_ACCENT_WIDTH))
        .height(Length::Fill)
        .style(move |_theme: &Theme| accent_bar_style(accent_color));

    let mut body = Column::new().spacing(spacing::XXS).push(
        Text::new(toast.title())
            .size(typography::BODY)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
    );
    if let Some(description) = toast.description() {
        body = body.push(
            Text::new(description)
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity::OVERLAY_HOVER,
                        ..theme.palette().text
                    }),
                }),
        );
    }

    let dismiss_button = button(Text::new("\u{00D7}").size(typography::BODY_LG))
        .on_press(Message::Dismiss(toast.id().clone()))
        .padding([0.0, spacing::XS])
        .style(dismiss_button_style);

    // Layout: [accent] [title/description] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .height(Length::Shrink)
        .align_y(alignment::Vertical::Center)
        .push(accent_bar)
        .push(Container::new(body).width(Length::Fill))
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .height(Length::Shrink)
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders every mounted toast, offset by its animation state at `now`.
///
/// Positions toasts in the top-right corner, newest at the bottom.
pub fn view_overlay(layer: &ToastLayer, now: Instant) -> Element<'_, Message> {
    let toasts: Vec<Element<'_, Message>> = layer
        .visible(now)
        .map(|(toast, offset)| {
            let shift = slide_distance(offset);
            float(view(toast))
                .translate(move |_bounds, _viewport| Vector::new(shift, 0.0))
                .into()
        })
        .collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let toast_column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
}

/// Converts an animation offset (fraction of toast width) into pixels.
fn slide_distance(offset: f32) -> f32 {
    offset * (sizing::TOAST_WIDTH + spacing::MD)
}

fn accent_bar_style(accent_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(accent_color)),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_fill = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (hover_fill(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (hover_fill(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
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
    use crate::ui::notifications::notification::{NewToast, ToastKind};
    use crate::ui::notifications::transition::{TransitionTimings, HIDDEN_OFFSET};

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = ToastKind::Success.color();
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_only_fills_on_interaction() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active).background.is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered).background.is_some());
        assert!(dismiss_button_style(&theme, button::Status::Pressed).background.is_some());
    }

    #[test]
    fn hidden_offset_pushes_toast_past_the_edge() {
        assert_eq!(slide_distance(0.0), 0.0);
        assert!(slide_distance(HIDDEN_OFFSET) > sizing::TOAST_WIDTH + spacing::MD);
    }

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let now = Instant::now();
        let mut layer = ToastLayer::new(TransitionTimings::default());
        let _ = view_overlay(&layer, now);

        let toast = NewToast::error("Failed")
            .with_description("Try again")
            .into_toast(ToastId::from("a1"));
        layer.reconcile(std::slice::from_ref(&toast), now);
        let _ = view_overlay(&layer, now);
        let _ = view(&toast);
    }
}
