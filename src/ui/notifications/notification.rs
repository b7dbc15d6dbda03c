// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the immutable `Toast` record, the `NewToast` request
//! that callers hand to the service, and the `ToastKind` styling selector.

use crate::config::{MAX_TOAST_EXPIRY_MS, MIN_TOAST_EXPIRY_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a toast.
///
/// Identifiers are random UUIDs rendered as strings. They are assigned by the
/// notification service when a toast is added, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToastId(String);

impl ToastId {
    /// Creates a new random identifier.
    pub(crate) fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of toast. Drives visual styling only, never timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Something went wrong (red).
    Error,
}

impl ToastKind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            ToastKind::Info => palette::INFO_500,
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Error => palette::ERROR_500,
        }
    }
}

/// A toast requested by a caller, before the service assigns its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewToast {
    kind: ToastKind,
    title: String,
    description: Option<String>,
    expire_after: Option<Duration>,
}

impl NewToast {
    /// Creates a toast request with the given kind and title.
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
            expire_after: None,
        }
    }

    /// Creates an info toast request.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    /// Creates a success toast request.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    /// Creates an error toast request.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    /// Adds a secondary line of text below the title.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the service's default expiry delay for this toast only.
    ///
    /// The delay is clamped to the same range the settings file accepts.
    #[must_use]
    pub fn expire_after(mut self, delay: Duration) -> Self {
        self.expire_after = Some(delay.clamp(
            Duration::from_millis(MIN_TOAST_EXPIRY_MS),
            Duration::from_millis(MAX_TOAST_EXPIRY_MS),
        ));
        self
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the per-toast expiry override, if any.
    #[must_use]
    pub fn expiry_override(&self) -> Option<Duration> {
        self.expire_after
    }

    pub(crate) fn into_toast(self, id: ToastId) -> Toast {
        Toast {
            id,
            kind: self.kind,
            title: self.title,
            description: self.description,
        }
    }
}

/// A toast held by the message store. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    title: String,
    description: Option<String>,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_unique() {
        let a = ToastId::random();
        let b = ToastId::random();
        assert_ne!(a, b);
    }

    #[test]
    fn random_ids_are_uuid_strings() {
        let id = ToastId::random();
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn kind_defaults_to_info() {
        assert_eq!(ToastKind::default(), ToastKind::Info);
    }

    #[test]
    fn kind_colors_are_distinct() {
        let info = ToastKind::Info.color();
        let success = ToastKind::Success.color();
        let error = ToastKind::Error.color();

        assert_ne!(info, success);
        assert_ne!(info, error);
        assert_ne!(success, error);
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(NewToast::info("").kind(), ToastKind::Info);
        assert_eq!(NewToast::success("").kind(), ToastKind::Success);
        assert_eq!(NewToast::error("").kind(), ToastKind::Error);
    }

    #[test]
    fn builder_keeps_description_and_override() {
        let request = NewToast::error("Failed")
            .with_description("Try again later")
            .expire_after(Duration::from_secs(10));

        assert_eq!(request.title(), "Failed");
        assert_eq!(request.description(), Some("Try again later"));
        assert_eq!(request.expiry_override(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn expiry_override_is_clamped_to_settings_range() {
        let long = NewToast::info("").expire_after(Duration::MAX);
        let short = NewToast::info("").expire_after(Duration::ZERO);

        assert_eq!(
            long.expiry_override(),
            Some(Duration::from_millis(MAX_TOAST_EXPIRY_MS))
        );
        assert_eq!(
            short.expiry_override(),
            Some(Duration::from_millis(MIN_TOAST_EXPIRY_MS))
        );
    }

    #[test]
    fn into_toast_carries_fields() {
        let toast = NewToast::success("Saved")
            .with_description("All good")
            .into_toast(ToastId::from("a1"));

        assert_eq!(toast.id().as_str(), "a1");
        assert_eq!(toast.kind(), ToastKind::Success);
        assert_eq!(toast.title(), "Saved");
        assert_eq!(toast.description(), Some("All good"));
    }
}
