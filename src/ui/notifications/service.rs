// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! `NotificationService` owns the message store and the expiry timers. It is
//! the only code allowed to mutate the store, and it funnels both automatic
//! expiry and manual dismissal through the same idempotent `remove`.
//!
//! The service is a cheap handle: clones share the same state. Everything runs
//! on the UI thread, so the state lives in a `RefCell` and no borrow is ever
//! held while subscriber callbacks run.

use super::notification::{NewToast, ToastId};
use super::store::{MessageStore, Snapshot, SubscriptionId};
use super::timers::ExpiryTimers;
use crate::config::DEFAULT_TOAST_EXPIRY_MS;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

struct Inner {
    store: MessageStore,
    timers: ExpiryTimers,
    expiry: Duration,
    id_source: Box<dyn FnMut() -> ToastId>,
    closed: bool,
}

/// Handle exposing `add`/`remove` over the shared message store.
#[derive(Clone)]
pub struct NotificationService {
    inner: Rc<RefCell<Inner>>,
}

impl fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("NotificationService")
            .field("messages", &inner.store.len())
            .field("pending_timers", &inner.timers.len())
            .field("expiry", &inner.expiry)
            .field("closed", &inner.closed)
            .finish()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TOAST_EXPIRY_MS))
    }
}

impl NotificationService {
    /// Creates a service whose toasts expire after `expiry` unless a toast
    /// overrides it.
    #[must_use]
    pub fn new(expiry: Duration) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                store: MessageStore::new(),
                timers: ExpiryTimers::new(),
                expiry,
                id_source: Box::new(ToastId::random),
                closed: false,
            })),
        }
    }

    /// Replaces the random id generator. Meant for deterministic tests; the
    /// source must never repeat an id that is still stored.
    #[must_use]
    pub fn with_id_source(self, source: impl FnMut() -> ToastId + 'static) -> Self {
        self.inner.borrow_mut().id_source = Box::new(source);
        self
    }

    /// Adds a toast, schedules its expiry and returns its new id.
    pub fn add(&self, toast: NewToast) -> ToastId {
        self.add_at(toast, Instant::now())
    }

    /// Same as [`add`](Self::add), with the expiry measured from `now`.
    pub fn add_at(&self, toast: NewToast, now: Instant) -> ToastId {
        let id = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            let id = (inner.id_source)();

            if inner.closed {
                log::warn!("toast {id:?} added after the notification provider was unmounted; ignored");
                return id;
            }

            let delay = toast.expiry_override().unwrap_or(inner.expiry);
            log::debug!(
                "toast {id} added ({:?}), expires in {}ms",
                toast.kind(),
                delay.as_millis()
            );
            inner.store.append(toast.into_toast(id.clone()));
            match now.checked_add(delay) {
                Some(deadline) => inner.timers.schedule(id.clone(), deadline),
                None => log::warn!("toast {id} expiry out of range; it stays until dismissed"),
            }
            id
        };

        self.publish();
        id
    }

    /// Removes the toast with this id.
    ///
    /// Removing an id that is not stored (already expired, already dismissed,
    /// or never added) does nothing, so the expiry timer and a manual dismiss
    /// can both call this safely.
    pub fn remove(&self, id: &ToastId) {
        let removed = self.inner.borrow_mut().store.remove(id);
        if removed {
            log::debug!("toast {id} removed");
            self.publish();
        }
    }

    /// Fires every expiry timer due at `now`. Returns how many fired.
    pub fn fire_due(&self, now: Instant) -> usize {
        let due = self.inner.borrow_mut().timers.pop_due(now);
        for id in &due {
            log::debug!("toast {id} expired");
            self.remove(id);
        }
        due.len()
    }

    /// Returns the current toasts, oldest first.
    #[must_use]
    pub fn messages(&self) -> Snapshot {
        self.inner.borrow().store.snapshot()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().store.is_empty()
    }

    /// Returns the store revision, bumped by every effective mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner.borrow().store.revision()
    }

    /// Registers a callback invoked with the new contents after each change.
    ///
    /// Callbacks run synchronously, after the mutation is complete. They may
    /// call `add` or `remove`; the resulting change is published to every
    /// subscriber once the current round finishes.
    pub fn subscribe(&self, subscriber: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        self.inner.borrow_mut().store.subscribe(Box::new(subscriber))
    }

    /// Cancels a subscription. Returns `true` if it was live.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().store.unsubscribe(id)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().store.subscriber_count()
    }

    /// Returns the earliest pending expiry deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.borrow().timers.next_deadline()
    }

    /// Returns the number of expiry timers not fired yet.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Returns the default expiry delay.
    #[must_use]
    pub fn expiry(&self) -> Duration {
        self.inner.borrow().expiry
    }

    /// Returns whether the owning provider has been unmounted.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }

    /// Returns whether both handles point to the same service.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Tears the service down: cancels pending timers, drops all toasts and
    /// subscriptions. Later `add` calls are ignored.
    pub(crate) fn shutdown(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.closed {
            return;
        }
        inner.closed = true;

        let cancelled = inner.timers.cancel_all();
        inner.store.clear();
        inner.store.drop_subscribers();
        log::debug!("notification service shut down, {cancelled} timer(s) cancelled");
    }

    /// Notifies subscribers until the store stops changing underneath them.
    fn publish(&self) {
        loop {
            let (snapshot, revision, mut dispatch) = {
                let mut inner = self.inner.borrow_mut();
                (
                    inner.store.snapshot(),
                    inner.store.revision(),
                    inner.store.detach_subscribers(),
                )
            };

            dispatch.notify(&snapshot);

            let mut inner = self.inner.borrow_mut();
            inner.store.reattach_subscribers(dispatch);
            if inner.store.revision() == revision {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::ToastKind;
    use std::cell::Cell;

    const DELAY: Duration = Duration::from_millis(3000);

    /// Service producing "a1", "a2", ... for readable assertions.
    fn sequential_service() -> NotificationService {
        let counter = Cell::new(0);
        NotificationService::new(DELAY).with_id_source(move || {
            counter.set(counter.get() + 1);
            ToastId::from(format!("a{}", counter.get()))
        })
    }

    fn ids(service: &NotificationService) -> Vec<String> {
        service
            .messages()
            .iter()
            .map(|t| t.id().to_string())
            .collect()
    }

    #[test]
    fn add_then_remove_scenario() {
        let service = sequential_service();

        let first = service.add(NewToast::info("Saved"));
        assert_eq!(first.as_str(), "a1");
        let messages = service.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].title(), "Saved");
        assert_eq!(messages[0].kind(), ToastKind::Info);

        let second = service.add(NewToast::error("Failed"));
        assert_eq!(second.as_str(), "a2");
        assert_eq!(ids(&service), vec!["a1", "a2"]);

        service.remove(&first);
        assert_eq!(ids(&service), vec!["a2"]);

        service.remove(&first);
        assert_eq!(ids(&service), vec!["a2"]);
    }

    #[test]
    fn default_ids_are_unique() {
        let service = NotificationService::new(DELAY);
        let mut seen = std::collections::HashSet::new();
        for i in 0..100 {
            assert!(seen.insert(service.add(NewToast::info(format!("toast {i}")))));
        }
    }

    #[test]
    fn toast_is_present_just_before_expiry_and_gone_just_after() {
        let service = sequential_service();
        let start = Instant::now();
        let id = service.add_at(NewToast::info("Saved"), start);
        let epsilon = Duration::from_millis(1);

        assert_eq!(service.fire_due(start + DELAY - epsilon), 0);
        assert_eq!(ids(&service), vec![id.to_string()]);

        assert_eq!(service.fire_due(start + DELAY + epsilon), 1);
        assert!(service.is_empty());
    }

    #[test]
    fn manual_dismiss_preempts_timer() {
        let service = sequential_service();
        let start = Instant::now();
        let id = service.add_at(NewToast::success("Sent"), start);
        let other = service.add_at(NewToast::info("Other"), start + Duration::from_secs(2));

        service.remove(&id);
        assert_eq!(ids(&service), vec![other.to_string()]);
        let revision = service.revision();

        // The stale timer fires but observes nothing to remove.
        assert_eq!(service.fire_due(start + DELAY), 1);
        assert_eq!(service.revision(), revision);
        assert_eq!(ids(&service), vec![other.to_string()]);
    }

    #[test]
    fn per_toast_expiry_override_is_honoured() {
        let service = sequential_service();
        let start = Instant::now();
        service.add_at(
            NewToast::info("Long").expire_after(Duration::from_secs(10)),
            start,
        );
        let short = service.add_at(NewToast::info("Short"), start);

        service.fire_due(start + DELAY);

        let remaining = ids(&service);
        assert_eq!(remaining, vec!["a1"]);
        assert_ne!(remaining[0], short.to_string());
    }

    #[test]
    fn huge_expiry_override_is_clamped() {
        let service = sequential_service();
        let start = Instant::now();
        let id = service.add_at(NewToast::info("forever").expire_after(Duration::MAX), start);

        assert_eq!(ids(&service), vec![id.to_string()]);
        assert_eq!(service.pending_timers(), 1);

        let limit = Duration::from_millis(crate::config::MAX_TOAST_EXPIRY_MS);
        assert_eq!(service.fire_due(start + limit - Duration::from_millis(1)), 0);
        assert_eq!(service.fire_due(start + limit), 1);
        assert!(service.is_empty());
        assert_eq!(service.pending_timers(), 0);
    }

    #[test]
    fn unrepresentable_deadline_keeps_toast_without_timer() {
        let service = NotificationService::new(Duration::MAX);
        let id = service.add(NewToast::info("sticky"));

        assert_eq!(service.messages().len(), 1);
        assert_eq!(service.pending_timers(), 0);

        service.remove(&id);
        assert!(service.is_empty());
    }

    #[test]
    fn removal_never_touches_other_toasts() {
        let service = sequential_service();
        service.add(NewToast::info("one"));
        let two = service.add(NewToast::error("two"));
        service.add(NewToast::success("three"));
        let before: Vec<_> = service.messages().iter().cloned().collect();

        service.remove(&two);

        let after = service.messages();
        assert_eq!(after.len(), 2);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
    }

    #[test]
    fn subscribers_see_every_change_in_order() {
        let service = sequential_service();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        service.subscribe(move |snapshot| {
            sink.borrow_mut()
                .push(snapshot.iter().map(|t| t.id().to_string()).collect::<Vec<_>>());
        });

        let a1 = service.add(NewToast::info("one"));
        service.add(NewToast::info("two"));
        service.remove(&a1);
        service.remove(&a1);

        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["a1".to_string()],
                vec!["a1".to_string(), "a2".to_string()],
                vec!["a2".to_string()],
            ]
        );
    }

    #[test]
    fn unsubscribed_callback_is_not_called() {
        let service = sequential_service();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = service.subscribe(move |_| counter.set(counter.get() + 1));

        service.add(NewToast::info("one"));
        assert!(service.unsubscribe(subscription));
        service.add(NewToast::info("two"));

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn subscriber_may_mutate_reentrantly() {
        let service = sequential_service();
        let handle = service.clone();
        let last_seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&last_seen);

        // Dismisses every error toast as soon as it shows up.
        service.subscribe(move |snapshot| {
            let errors: Vec<ToastId> = snapshot
                .iter()
                .filter(|t| t.kind() == ToastKind::Error)
                .map(|t| t.id().clone())
                .collect();
            for id in &errors {
                handle.remove(id);
            }
            *sink.borrow_mut() = snapshot.iter().map(|t| t.id().to_string()).collect();
        });

        service.add(NewToast::info("kept"));
        service.add(NewToast::error("dropped"));

        assert_eq!(ids(&service), vec!["a1"]);
        assert_eq!(*last_seen.borrow(), vec!["a1".to_string()]);
    }

    #[test]
    fn shutdown_cancels_timers_and_ignores_later_adds() {
        let service = sequential_service();
        service.add(NewToast::info("one"));
        service.add(NewToast::info("two"));
        assert_eq!(service.pending_timers(), 2);

        service.shutdown();

        assert!(service.is_closed());
        assert_eq!(service.pending_timers(), 0);
        assert!(service.is_empty());

        service.add(NewToast::info("late"));
        assert!(service.is_empty());
        assert_eq!(service.pending_timers(), 0);
    }

    #[test]
    fn clones_share_state() {
        let service = sequential_service();
        let other = service.clone();

        let id = other.add(NewToast::info("shared"));
        assert_eq!(ids(&service), vec![id.to_string()]);
        assert!(service.ptr_eq(&other));
        assert!(!service.ptr_eq(&NotificationService::default()));
    }

    #[test]
    fn next_deadline_reflects_default_expiry() {
        let service = sequential_service();
        let start = Instant::now();
        assert!(service.next_deadline().is_none());

        service.add_at(NewToast::info("one"), start);
        assert_eq!(service.next_deadline(), Some(start + DELAY));
    }
}
