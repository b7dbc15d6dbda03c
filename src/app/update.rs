// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Page messages are routed to their component, and the events they emit
//! become navigation or backend requests. Request outcomes are reported to
//! the user as toasts through the provider mounted by the application.

use super::{Message, Screen};
use crate::auth::{ApiClient, Auth, Session};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{use_notifications, NewToast, ToastMessage};
use crate::ui::{dashboard, forgot_password, sign_in, sign_up};
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub auth: &'a mut Auth,
    pub api: &'a ApiClient,
    pub sign_in: &'a mut sign_in::State,
    pub sign_up: &'a mut sign_up::State,
    pub forgot_password: &'a mut forgot_password::State,
    pub dashboard: &'a mut dashboard::State,
}

impl UpdateContext<'_> {
    fn navigate(&mut self, requested: Screen) {
        let resolved = Screen::resolve(requested, self.auth.is_signed_in());
        if resolved != requested {
            log::debug!("redirecting {requested:?} to {resolved:?}");
        }
        if resolved == Screen::Dashboard && *self.screen != Screen::Dashboard {
            *self.dashboard = dashboard::State::default();
        }
        *self.screen = resolved;
    }

    /// Shows an error toast titled by `title_key` and described by the
    /// localized cause.
    fn report_error(&self, title_key: &str, err: &Error) {
        log::warn!("{title_key}: {err}");
        use_notifications().add(
            NewToast::error(self.i18n.tr(title_key)).with_description(self.i18n.tr(err.i18n_key())),
        );
    }

    fn report_success(&self, title_key: &str, description_key: &str) {
        use_notifications().add(
            NewToast::success(self.i18n.tr(title_key))
                .with_description(self.i18n.tr(description_key)),
        );
    }
}

/// Dispatches a top-level message.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message, now: Instant) -> Task<Message> {
    match message {
        Message::SignIn(msg) => handle_sign_in(ctx, msg),
        Message::SignUp(msg) => handle_sign_up(ctx, msg),
        Message::ForgotPassword(msg) => handle_forgot_password(ctx, msg),
        Message::Dashboard(msg) => {
            handle_dashboard(ctx, msg);
            Task::none()
        }
        Message::Toast(ToastMessage::Dismiss(id)) => {
            use_notifications().remove(&id);
            Task::none()
        }
        Message::Tick(_) => {
            let expired = use_notifications().fire_due(now);
            if expired > 0 {
                log::debug!("{expired} toast(s) expired");
            }
            Task::none()
        }
        // The overlay advances after every message; frames only wake it up.
        Message::Frame(_) => Task::none(),
        Message::Navigate(screen) => {
            ctx.navigate(screen);
            Task::none()
        }
        Message::SignInCompleted(result) => {
            handle_sign_in_completed(ctx, result);
            Task::none()
        }
        Message::SignUpCompleted(result) => {
            let succeeded = result.is_ok();
            ctx.sign_up.finish(succeeded);
            match result {
                Ok(user) => {
                    log::info!("account created for {}", user.email);
                    ctx.report_success("sign-up-success-title", "sign-up-success-description");
                    ctx.navigate(Screen::SignIn);
                }
                Err(err) => ctx.report_error("sign-up-error-title", &err),
            }
            Task::none()
        }
        Message::ForgotPasswordCompleted(result) => {
            ctx.forgot_password.finish();
            match result {
                Ok(()) => ctx.report_success("forgot-success-title", "forgot-success-description"),
                Err(err) => ctx.report_error("forgot-error-title", &err),
            }
            Task::none()
        }
    }
}

fn handle_sign_in(ctx: &mut UpdateContext<'_>, message: sign_in::Message) -> Task<Message> {
    match ctx.sign_in.update(message) {
        sign_in::Event::None => Task::none(),
        sign_in::Event::ForgotPassword => {
            ctx.navigate(Screen::ForgotPassword);
            Task::none()
        }
        sign_in::Event::CreateAccount => {
            ctx.navigate(Screen::SignUp);
            Task::none()
        }
        sign_in::Event::Submit(credentials) => {
            let api = ctx.api.clone();
            Task::perform(
                async move { api.sign_in(&credentials).await },
                Message::SignInCompleted,
            )
        }
    }
}

fn handle_sign_in_completed(ctx: &mut UpdateContext<'_>, result: Result<Session, Error>) {
    ctx.sign_in.finish(result.is_ok());
    match result {
        Ok(session) => {
            if let Some(key) = ctx.auth.sign_in(session) {
                use_notifications().add(NewToast::info(ctx.i18n.tr(&key)));
            }
            ctx.navigate(Screen::Dashboard);
        }
        Err(err) => ctx.report_error("sign-in-error-title", &err),
    }
}

fn handle_sign_up(ctx: &mut UpdateContext<'_>, message: sign_up::Message) -> Task<Message> {
    match ctx.sign_up.update(message) {
        sign_up::Event::None => Task::none(),
        sign_up::Event::Back => {
            ctx.navigate(Screen::SignIn);
            Task::none()
        }
        sign_up::Event::Submit(user) => {
            let api = ctx.api.clone();
            Task::perform(
                async move { api.sign_up(&user).await },
                Message::SignUpCompleted,
            )
        }
    }
}

fn handle_forgot_password(
    ctx: &mut UpdateContext<'_>,
    message: forgot_password::Message,
) -> Task<Message> {
    match ctx.forgot_password.update(message) {
        forgot_password::Event::None => Task::none(),
        forgot_password::Event::Back => {
            ctx.navigate(Screen::SignIn);
            Task::none()
        }
        forgot_password::Event::Submit(email) => {
            let api = ctx.api.clone();
            Task::perform(
                async move { api.forgot_password(&email).await },
                Message::ForgotPasswordCompleted,
            )
        }
    }
}

fn handle_dashboard(ctx: &mut UpdateContext<'_>, message: dashboard::Message) {
    match ctx.dashboard.update(message) {
        dashboard::Event::None => {}
        dashboard::Event::SignOut => {
            ctx.auth.sign_out();
            ctx.navigate(Screen::SignIn);
        }
    }
}
