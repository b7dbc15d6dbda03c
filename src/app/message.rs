// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags.

use super::Screen;
use crate::auth::{Session, User};
use crate::error::Error;
use crate::ui::notifications::ToastMessage;
use crate::ui::{dashboard, forgot_password, sign_in, sign_up};
use std::time::Instant;

/// Top-level messages consumed by [`App::update`](super::App::update).
#[derive(Debug, Clone)]
pub enum Message {
    SignIn(sign_in::Message),
    SignUp(sign_up::Message),
    ForgotPassword(forgot_password::Message),
    Dashboard(dashboard::Message),
    Toast(ToastMessage),
    /// Periodic tick that fires due toast expiries.
    Tick(Instant),
    /// Redraw frame while toasts are animating.
    Frame(Instant),
    Navigate(Screen),
    /// Result of `POST /sessions`.
    SignInCompleted(Result<Session, Error>),
    /// Result of `POST /users`.
    SignUpCompleted(Result<User, Error>),
    /// Result of `POST /forgot/password`.
    ForgotPasswordCompleted(Result<(), Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for the stored session).
    /// Takes precedence over `GOBARBER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GOBARBER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
