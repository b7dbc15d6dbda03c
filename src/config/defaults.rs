// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toasts**: Auto-expiry delay and enter/leave animation durations
//! - **API**: Backend base URL and request timeout
//! - **Forms**: Input validation bounds

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays visible before it removes itself (in milliseconds).
pub const DEFAULT_TOAST_EXPIRY_MS: u64 = 3000;

/// Minimum toast expiry delay (in milliseconds).
pub const MIN_TOAST_EXPIRY_MS: u64 = 500;

/// Maximum toast expiry delay (in milliseconds).
pub const MAX_TOAST_EXPIRY_MS: u64 = 60_000;

/// Default duration of the slide-in animation (in milliseconds).
pub const DEFAULT_TOAST_ENTER_MS: u64 = 300;

/// Default duration of the slide-out animation (in milliseconds).
pub const DEFAULT_TOAST_LEAVE_MS: u64 = 300;

/// Maximum enter/leave animation duration (in milliseconds). Zero disables
/// the animation.
pub const MAX_TOAST_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Default backend base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

/// Timeout applied to every API request (in seconds).
pub const API_TIMEOUT_SECS: u64 = 15;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Minimum password length accepted on sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_EXPIRY_MS > 0);
    assert!(MIN_TOAST_EXPIRY_MS <= DEFAULT_TOAST_EXPIRY_MS);
    assert!(DEFAULT_TOAST_EXPIRY_MS <= MAX_TOAST_EXPIRY_MS);

    assert!(DEFAULT_TOAST_ENTER_MS <= MAX_TOAST_ANIMATION_MS);
    assert!(DEFAULT_TOAST_LEAVE_MS <= MAX_TOAST_ANIMATION_MS);

    // Animations must finish well within a toast's lifetime.
    assert!(MAX_TOAST_ANIMATION_MS * 2 < MAX_TOAST_EXPIRY_MS);

    assert!(API_TIMEOUT_SECS > 0);
    assert!(MIN_PASSWORD_LEN > 0);
};
