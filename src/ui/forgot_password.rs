// SPDX-License-Identifier: MPL-2.0
//! Forgot-password page.
//!
//! The submit button shows a loading label while the recovery request is in
//! flight.

use crate::i18n::fluent::I18n;
use crate::ui::form::{self, Field, Rule};
use iced::widget::Column;
use iced::Element;

const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];

#[derive(Debug, Clone, Default)]
pub struct State {
    email: Field,
    loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    Submit,
    Back,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Request a recovery e-mail for this address.
    Submit(String),
    Back,
}

impl State {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email.set(value);
                Event::None
            }
            Message::Submit => {
                if !self.email.validate(EMAIL_RULES) || self.loading {
                    return Event::None;
                }
                self.loading = true;
                Event::Submit(self.email.value().trim().to_string())
            }
            Message::Back => Event::Back,
        }
    }

    /// Clears the loading flag once the request settled, whatever the outcome.
    pub fn finish(&mut self) {
        self.loading = false;
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let content = Column::new()
            .push(form::input(
                &i18n.tr("field-email"),
                &self.email,
                false,
                Message::EmailChanged,
                Message::Submit,
                i18n,
            ))
            .push(form::submit(
                i18n.tr("forgot-submit"),
                self.loading,
                Message::Submit,
                i18n,
            ));

        form::page(
            i18n.tr("forgot-title"),
            content,
            form::link(i18n.tr("forgot-back"), Message::Back),
            i18n,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_flag_spans_the_request() {
        let mut state = State::default();
        state.update(Message::EmailChanged("ana@example.com".to_string()));

        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::Submit(ref email) if email == "ana@example.com"));
        assert!(state.is_loading());

        state.finish();
        assert!(!state.is_loading());
    }

    #[test]
    fn invalid_email_never_starts_loading() {
        let mut state = State::default();
        state.update(Message::EmailChanged("nope".to_string()));

        assert!(matches!(state.update(Message::Submit), Event::None));
        assert!(!state.is_loading());
    }
}
