// SPDX-License-Identifier: MPL-2.0
//! `gobarber_client` is a desktop client for the GoBarber scheduling service,
//! built with the Iced GUI framework.
//!
//! Its centerpiece is a toast notification system: any page can report the
//! outcome of an action through a shared notification service, and the
//! toasts slide in at the top-right corner, expire on their own and can be
//! dismissed early.
//!
//! # Modules
//!
//! - [`ui::notifications`] - Toast store, expiry timers, provider scope and overlay
//! - [`app`] - Iced application root, routing and message dispatch
//! - [`auth`] - Backend client and persisted sign-in session
//! - [`config`] - `settings.toml` loading with defaults
//! - [`i18n`] - Fluent localisation
//! - [`error`] - Crate error types

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
mod test_utils;
