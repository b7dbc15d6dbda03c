// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and the signed-in route guard.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    SignIn,
    SignUp,
    ForgotPassword,
    Dashboard,
}

impl Screen {
    /// Returns whether the screen is only reachable with a session.
    #[must_use]
    pub fn is_private(self) -> bool {
        matches!(self, Screen::Dashboard)
    }

    /// Returns the screen actually shown when `requested` is asked for.
    ///
    /// Private screens fall back to sign-in without a session; public
    /// screens redirect a signed-in user to the dashboard.
    #[must_use]
    pub fn resolve(requested: Screen, signed_in: bool) -> Screen {
        match (requested.is_private(), signed_in) {
            (true, false) => Screen::SignIn,
            (false, true) => Screen::Dashboard,
            _ => requested,
        }
    }
}
