// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Pages follow the Elm-style "state down, messages up" pattern: each owns a
//! `State`, turns its `Message`s into `Event`s for the application, and
//! renders itself from borrowed state.
//!
//! # Pages
//!
//! - [`sign_in`] - E-mail and password login
//! - [`sign_up`] - Account creation
//! - [`forgot_password`] - Password recovery request
//! - [`dashboard`] - Greeting and schedule day for a signed-in user
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`form`] - Validated text fields and form layout
//! - [`styles`] - Centralized button styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod dashboard;
pub mod design_tokens;
pub mod forgot_password;
pub mod form;
pub mod notifications;
pub mod sign_in;
pub mod sign_up;
pub mod styles;
pub mod theming;
