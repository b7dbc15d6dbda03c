// SPDX-License-Identifier: MPL-2.0
//! Sign-in page.
//!
//! Validates the form locally and hands valid credentials to the
//! application, which performs the request and reports failures as an
//! error toast.

use crate::auth::Credentials;
use crate::i18n::fluent::I18n;
use crate::ui::form::{self, Field, Rule};
use iced::widget::Column;
use iced::Element;

const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const PASSWORD_RULES: &[Rule] = &[Rule::Required];

#[derive(Debug, Clone, Default)]
pub struct State {
    email: Field,
    password: Field,
    submitting: bool,
}

/// Messages emitted by the sign-in form.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    ForgotPassword,
    CreateAccount,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(Credentials),
    ForgotPassword,
    CreateAccount,
}

impl State {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email.set(value);
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password.set(value);
                Event::None
            }
            Message::Submit => {
                // Validate both fields so every error shows at once.
                let email_ok = self.email.validate(EMAIL_RULES);
                let password_ok = self.password.validate(PASSWORD_RULES);
                if !email_ok || !password_ok || self.submitting {
                    return Event::None;
                }
                self.submitting = true;
                Event::Submit(Credentials {
                    email: self.email.value().trim().to_string(),
                    password: self.password.value().to_string(),
                })
            }
            Message::ForgotPassword => Event::ForgotPassword,
            Message::CreateAccount => Event::CreateAccount,
        }
    }

    /// Re-enables the form after the request finished. The password is
    /// cleared on failure so it is never kept around longer than needed.
    pub fn finish(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            *self = Self::default();
        } else {
            self.password.clear();
        }
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
            .push(form::input(
                &i18n.tr("field-password"),
                &self.password,
                true,
                Message::PasswordChanged,
                Message::Submit,
                i18n,
            ))
            .push(form::submit(
                i18n.tr("sign-in-submit"),
                self.submitting,
                Message::Submit,
                i18n,
            ))
            .push(form::link(
                i18n.tr("sign-in-forgot-link"),
                Message::ForgotPassword,
            ));

        form::page(
            i18n.tr("sign-in-title"),
            content,
            form::link(i18n.tr("sign-in-create-account"), Message::CreateAccount),
            i18n,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::FieldError;

    fn filled() -> State {
        let mut state = State::default();
        state.update(Message::EmailChanged(" ana@example.com ".to_string()));
        state.update(Message::PasswordChanged("secret1".to_string()));
        state
    }

    #[test]
    fn invalid_form_does_not_submit() {
        let mut state = State::default();
        state.update(Message::EmailChanged("ana".to_string()));

        let event = state.update(Message::Submit);

        assert!(matches!(event, Event::None));
        assert_eq!(state.email.error(), Some(FieldError::InvalidEmail));
        assert_eq!(state.password.error(), Some(FieldError::Required));
        assert!(!state.is_submitting());
    }

    #[test]
    fn valid_form_submits_trimmed_email() {
        let mut state = filled();

        match state.update(Message::Submit) {
            Event::Submit(credentials) => {
                assert_eq!(credentials.email, "ana@example.com");
                assert_eq!(credentials.password, "secret1");
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(state.is_submitting());
    }

    #[test]
    fn second_submit_is_ignored_while_in_flight() {
        let mut state = filled();
        state.update(Message::Submit);

        assert!(matches!(state.update(Message::Submit), Event::None));
    }

    #[test]
    fn failure_keeps_email_and_clears_password() {
        let mut state = filled();
        state.update(Message::Submit);

        state.finish(false);

        assert!(!state.is_submitting());
        assert_eq!(state.email.value(), " ana@example.com ");
        assert!(state.password.value().is_empty());
    }

    #[test]
    fn links_become_navigation_events() {
        let mut state = State::default();
        assert!(matches!(
            state.update(Message::ForgotPassword),
            Event::ForgotPassword
        ));
        assert!(matches!(
            state.update(Message::CreateAccount),
            Event::CreateAccount
        ));
    }
}
