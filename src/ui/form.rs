// SPDX-License-Identifier: MPL-2.0
//! Form fields with inline validation.
//!
//! Each field validates against an ordered list of rules and keeps the first
//! failure. Validation errors render under the field; they never become
//! toasts.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

/// A validation rule applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be blank.
    Required,
    /// Value must look like an e-mail address.
    Email,
    /// Value must have at least this many characters.
    MinLength(usize),
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort { min: usize },
}

impl FieldError {
    /// Returns the localized message shown under the field.
    #[must_use]
    pub fn message(&self, i18n: &I18n) -> String {
        match self {
            FieldError::Required => i18n.tr("validation-required"),
            FieldError::InvalidEmail => i18n.tr("validation-email"),
            FieldError::TooShort { min } => {
                i18n.tr_with_args("validation-min-length", &[("min", min.to_string().as_str())])
            }
        }
    }
}

/// Checks `value` against `rules` in order and returns the first failure.
#[must_use]
pub fn validate(value: &str, rules: &[Rule]) -> Option<FieldError> {
    let trimmed = value.trim();
    rules.iter().find_map(|rule| match rule {
        Rule::Required if trimmed.is_empty() => Some(FieldError::Required),
        Rule::Email if !trimmed.is_empty() && !is_email(trimmed) => Some(FieldError::InvalidEmail),
        Rule::MinLength(min) if value.chars().count() < *min => {
            Some(FieldError::TooShort { min: *min })
        }
        _ => None,
    })
}

/// Loose e-mail shape check: `local@domain.tld`, no whitespace.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

/// A text field and its validation state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    value: String,
    error: Option<FieldError>,
}

impl Field {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    /// Replaces the value. A shown error stays until the next validation.
    pub fn set(&mut self, value: String) {
        self.value = value;
    }

    /// Validates the current value and records the outcome.
    pub fn validate(&mut self, rules: &[Rule]) -> bool {
        self.error = validate(&self.value, rules);
        self.error.is_none()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }
}

/// Renders a labelled input with its inline error.
pub fn input<'a, Message: Clone + 'a>(
    placeholder: &str,
    field: &'a Field,
    secure: bool,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
    i18n: &I18n,
) -> Element<'a, Message> {
    let has_error = field.error().is_some();

    let input = text_input(placeholder, field.value())
        .on_input(on_input)
        .on_submit(on_submit)
        .secure(secure)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .style(move |theme: &Theme, status| input_style(theme, status, has_error));

    let mut column = Column::new().spacing(spacing::XXS).push(input);
    if let Some(error) = field.error() {
        column = column.push(
            Text::new(error.message(i18n))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }
    column.into()
}

/// Primary submit button. Shows the "sending" label and ignores presses
/// while `busy`.
pub fn submit<'a, Message: Clone + 'a>(
    label: String,
    busy: bool,
    on_press: Message,
    i18n: &I18n,
) -> Element<'a, Message> {
    let label = if busy { i18n.tr("form-sending") } else { label };
    button(
        Container::new(Text::new(label).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press_maybe((!busy).then_some(on_press))
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::primary)
    .into()
}

/// Text link used to move between the authentication screens.
pub fn link<'a, Message: Clone + 'a>(label: String, on_press: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(on_press)
        .style(styles::button::link)
        .into()
}

/// Centers a titled form on the window.
pub fn page<'a, Message: 'a>(
    title: String,
    content: Column<'a, Message>,
    footer: Element<'a, Message>,
    i18n: &I18n,
) -> Element<'a, Message> {
    let brand = Text::new(i18n.tr("app-title"))
        .size(typography::TITLE_LG)
        .color(palette::PRIMARY_500);

    let form = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(brand)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(content.spacing(spacing::XS).align_x(Horizontal::Center))
        .push(footer);

    Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn input_style(theme: &Theme, status: text_input::Status, has_error: bool) -> text_input::Style {
    let mut style = text_input::default(theme, status);
    let extended = theme.extended_palette();

    style.background = Background::Color(extended.background.weak.color);
    style.border = Border {
        color: match status {
            _ if has_error => palette::ERROR_500,
            text_input::Status::Focused { .. } => extended.primary.base.color,
            _ => Color::TRANSPARENT,
        },
        width: if has_error { border::WIDTH_MD } else { border::WIDTH_SM },
        radius: radius::MD.into(),
    };
    style
}
