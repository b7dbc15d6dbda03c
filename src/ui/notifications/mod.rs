// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear temporarily in the top-right corner to report the outcome of
//! an action (sign-in failed, account created, ...) without blocking
//! interaction. Each toast removes itself after a fixed delay unless the user
//! dismisses it first.
//!
//! # Components
//!
//! - [`notification`] - `Toast`, `NewToast` and the `ToastKind` styling selector
//! - [`store`] - ordered, snapshot-based storage observed by subscribers
//! - [`timers`] - deadline-ordered expiry timers
//! - [`service`] - `NotificationService`, the only writer of the store
//! - [`context`] - provider scope and `use_notifications` lookup
//! - [`transition`] - enter/leave animation state per rendered toast
//! - [`toast`] - Iced rendering of the toast overlay
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{use_notifications, NewToast, NotificationProvider};
//!
//! // Once, at application start
//! let provider = NotificationProvider::mount(&config.notifications);
//!
//! // Anywhere on the UI thread
//! use_notifications().add(NewToast::error("Sign-in failed").with_description("Check your credentials"));
//!
//! // From the periodic tick
//! provider.service().fire_due(Instant::now());
//! ```

pub mod context;
pub mod notification;
pub mod service;
pub mod store;
pub mod timers;
pub mod toast;
pub mod transition;

pub use context::{try_use_notifications, use_notifications, NotificationProvider};
pub use notification::{NewToast, Toast, ToastId, ToastKind};
pub use service::NotificationService;
pub use store::{Snapshot, SubscriptionId};
pub use toast::Message as ToastMessage;
pub use transition::{Phase, ToastLayer, TransitionTimings};
