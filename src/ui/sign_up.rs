// SPDX-License-Identifier: MPL-2.0
//! Sign-up page.

use crate::auth::NewUser;
use crate::config::MIN_PASSWORD_LEN;
use crate::i18n::fluent::I18n;
use crate::ui::form::{self, Field, Rule};
use iced::widget::Column;
use iced::Element;

const NAME_RULES: &[Rule] = &[Rule::Required];
const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const PASSWORD_RULES: &[Rule] = &[Rule::MinLength(MIN_PASSWORD_LEN)];

#[derive(Debug, Clone, Default)]
pub struct State {
    name: Field,
    email: Field,
    password: Field,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Back,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(NewUser),
    Back,
}

impl State {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name.set(value);
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email.set(value);
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password.set(value);
                Event::None
            }
            Message::Submit => {
                let valid = [
                    self.name.validate(NAME_RULES),
                    self.email.validate(EMAIL_RULES),
                    self.password.validate(PASSWORD_RULES),
                ]
                .iter()
                .all(|ok| *ok);
                if !valid || self.submitting {
                    return Event::None;
                }
                self.submitting = true;
                Event::Submit(NewUser {
                    name: self.name.value().trim().to_string(),
                    email: self.email.value().trim().to_string(),
                    password: self.password.value().to_string(),
                })
            }
            Message::Back => Event::Back,
        }
    }

    /// Re-enables the form. A successful sign-up resets it.
    pub fn finish(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            *self = Self::default();
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let content = Column::new()
            .push(form::input(
                &i18n.tr("field-name"),
                &self.name,
                false,
                Message::NameChanged,
                Message::Submit,
                i18n,
            ))
            .push(form::input(
                &i18n.tr("field-email"),
                &self.email,
                false,
                Message::EmailChanged,
                Message::Submit,
                i18n,
            ))
            .push(form::input(
                &i18n.tr("field-password"),
                &self.password,
                true,
                Message::PasswordChanged,
                Message::Submit,
                i18n,
            ))
            .push(form::submit(
                i18n.tr("sign-up-submit"),
                self.submitting,
                Message::Submit,
                i18n,
            ));

        form::page(
            i18n.tr("sign-up-title"),
            content,
            form::link(i18n.tr("sign-up-back"), Message::Back),
            i18n,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::FieldError;

    #[test]
    fn short_password_is_rejected() {
        let mut state = State::default();
        state.update(Message::NameChanged("Ana".to_string()));
        state.update(Message::EmailChanged("ana@example.com".to_string()));
        state.update(Message::PasswordChanged("12345".to_string()));

        assert!(matches!(state.update(Message::Submit), Event::None));
        assert_eq!(
            state.password.error(),
            Some(FieldError::TooShort {
                min: MIN_PASSWORD_LEN
            })
        );
        assert!(state.name.error().is_none());
    }

    #[test]
    fn valid_form_submits_new_user() {
        let mut state = State::default();
        state.update(Message::NameChanged(" Ana ".to_string()));
        state.update(Message::EmailChanged("ana@example.com".to_string()));
        state.update(Message::PasswordChanged("123456".to_string()));

        match state.update(Message::Submit) {
            Event::Submit(user) => {
                assert_eq!(user.name, "Ana");
                assert_eq!(user.email, "ana@example.com");
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(state.is_submitting());

        state.finish(true);
        assert!(!state.is_submitting());
        assert!(state.name.value().is_empty());
    }
}
