// SPDX-License-Identifier: MPL-2.0
//! Authentication state, backend client and session persistence.
//!
//! [`Auth`] is the single owner of the signed-in session. Signing in stores
//! the `{token, user}` pair and persists it; signing out clears both; boot
//! restores whatever was persisted last.

pub mod api;
pub mod session;

pub use api::ApiClient;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Warning key returned when the session could not be written to disk.
pub const SAVE_ERROR_KEY: &str = "notification-session-save-error";

/// A GoBarber account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Token and user returned by a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Body of `POST /sessions`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /users`.
#[derive(Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signed-in state of the application.
#[derive(Debug, Default)]
pub struct Auth {
    session: Option<Session>,
    /// Data directory override; `None` uses the standard resolution.
    data_dir: Option<PathBuf>,
}

impl Auth {
    /// Restores the persisted session. Returns a warning key when a stored
    /// session exists but could not be read.
    pub fn restore(data_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (session, warning) = session::load(data_dir.clone());
        if let Some(session) = &session {
            log::info!("restored session for {}", session.user.email);
        }
        (Self { session, data_dir }, warning)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Stores and persists a new session. The user stays signed in for this
    /// run even if persisting fails; the warning key reports that case.
    pub fn sign_in(&mut self, session: Session) -> Option<String> {
        log::info!("signed in as {}", session.user.email);
        let warning = match session::save(&session, self.data_dir.clone()) {
            Ok(()) => None,
            Err(err) => {
                log::warn!("could not persist session: {err}");
                Some(SAVE_ERROR_KEY.to_string())
            }
        };
        self.session = Some(session);
        warning
    }

    /// Forgets the session, in memory and on disk.
    pub fn sign_out(&mut self) {
        if self.session.take().is_some() {
            log::info!("signed out");
        }
        if let Err(err) = session::clear(self.data_dir.clone()) {
            log::warn!("could not delete stored session: {err}");
        }
    }
}
