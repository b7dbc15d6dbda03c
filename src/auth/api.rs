// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the GoBarber backend.

use super::{Credentials, NewUser, Session, User};
use crate::config::{ApiConfig, API_TIMEOUT_SECS};
use crate::error::Result;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Cheap clonable client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(API_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|err| {
                log::warn!("falling back to default HTTP client: {err}");
                Client::new()
            });

        Self::with_client(client, config)
    }

    /// Uses a preconfigured `reqwest` client.
    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url().to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `POST /sessions`: exchanges credentials for a token and the user.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session> {
        log::debug!("signing in as {}", credentials.email);
        let session = self
            .client
            .post(self.endpoint("/sessions"))
            .json(credentials)
            .send()
            .await?
            .error_for_status()?
            .json::<Session>()
            .await?;
        Ok(session)
    }

    /// `POST /users`: creates an account.
    pub async fn sign_up(&self, user: &NewUser) -> Result<User> {
        log::debug!("creating account for {}", user.email);
        let created = self
            .client
            .post(self.endpoint("/users"))
            .json(user)
            .send()
            .await?
            .error_for_status()?
            .json::<User>()
            .await?;
        Ok(created)
    }

    /// `POST /forgot/password`: asks the backend to send a recovery e-mail.
    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        log::debug!("requesting password recovery for {email}");
        self.client
            .post(self.endpoint("/forgot/password"))
            .json(&ForgotPasswordRequest { email })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
