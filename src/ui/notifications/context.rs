// SPDX-License-Identifier: MPL-2.0
//! Provider scope for the notification service.
//!
//! A `NotificationProvider` is mounted once per application run. While it is
//! mounted, any code on the UI thread can reach the service through
//! [`use_notifications`] without having it passed down explicitly. Dropping
//! the provider unmounts it, which cancels every pending expiry timer.
//!
//! Looking the service up with no provider mounted is a wiring bug, so
//! [`use_notifications`] panics instead of handing back a handle that would
//! silently lose toasts. [`try_use_notifications`] reports the same condition
//! as a `UsageError`.

use super::service::NotificationService;
use crate::config::NotificationsConfig;
use crate::error::UsageError;
use std::cell::RefCell;

thread_local! {
    static PROVIDERS: RefCell<Vec<NotificationService>> = const { RefCell::new(Vec::new()) };
}

/// Mounted notification scope. Unmounts when dropped.
#[derive(Debug)]
pub struct NotificationProvider {
    service: NotificationService,
}

impl NotificationProvider {
    /// Creates the service described by `config` and mounts it.
    #[must_use]
    pub fn mount(config: &NotificationsConfig) -> Self {
        Self::mount_service(NotificationService::new(config.expiry()))
    }

    /// Mounts an already-built service. Nested providers shadow outer ones
    /// until they are dropped.
    #[must_use]
    pub fn mount_service(service: NotificationService) -> Self {
        PROVIDERS.with(|providers| providers.borrow_mut().push(service.clone()));
        log::debug!("notification provider mounted");
        Self { service }
    }

    /// Returns the service owned by this provider.
    #[must_use]
    pub fn service(&self) -> &NotificationService {
        &self.service
    }
}

impl Drop for NotificationProvider {
    fn drop(&mut self) {
        // Thread-local storage may already be gone during thread teardown.
        let _ = PROVIDERS.try_with(|providers| {
            let mut providers = providers.borrow_mut();
            if let Some(pos) = providers
                .iter()
                .rposition(|mounted| mounted.ptr_eq(&self.service))
            {
                providers.remove(pos);
            }
        });
        self.service.shutdown();
        log::debug!("notification provider unmounted");
    }
}

/// Returns the service of the innermost mounted provider.
pub fn try_use_notifications() -> Result<NotificationService, UsageError> {
    PROVIDERS.with(|providers| providers.borrow().last().cloned().ok_or(UsageError::NoProvider))
}

/// Returns the service of the innermost mounted provider.
///
/// # Panics
///
/// Panics with [`UsageError::NoProvider`] when no provider is mounted on the
/// current thread.
#[must_use]
pub fn use_notifications() -> NotificationService {
    match try_use_notifications() {
        Ok(service) => service,
        Err(err) => panic!("{err}"),
    }
}
