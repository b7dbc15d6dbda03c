// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active page is drawn underneath the toast overlay so toasts stay
//! visible across navigation.

use super::{Message, Screen};
use crate::auth::Auth;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{toast, ToastLayer};
use crate::ui::{dashboard, forgot_password, sign_in, sign_up};
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub auth: &'a Auth,
    pub sign_in: &'a sign_in::State,
    pub sign_up: &'a sign_up::State,
    pub forgot_password: &'a forgot_password::State,
    pub dashboard: &'a dashboard::State,
    pub toasts: &'a ToastLayer,
    pub now: Instant,
}

/// Renders the current page with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page: Element<'_, Message> = match (ctx.screen, ctx.auth.user()) {
        (Screen::SignIn, _) => ctx.sign_in.view(ctx.i18n).map(Message::SignIn),
        (Screen::SignUp, _) => ctx.sign_up.view(ctx.i18n).map(Message::SignUp),
        (Screen::ForgotPassword, _) => ctx
            .forgot_password
            .view(ctx.i18n)
            .map(Message::ForgotPassword),
        (Screen::Dashboard, Some(user)) => ctx
            .dashboard
            .view(user, ctx.i18n)
            .map(Message::Dashboard),
        // Routing never shows the dashboard without a session.
        (Screen::Dashboard, None) => ctx.sign_in.view(ctx.i18n).map(Message::SignIn),
    };

    let overlay = toast::view_overlay(ctx.toasts, ctx.now).map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(overlay)
        .into()
}
