// SPDX-License-Identifier: MPL-2.0
//! Ordered storage for the active toasts.
//!
//! The store keeps the toasts as one immutable snapshot. Every mutation builds
//! a new snapshot and replaces the old one wholesale, so a subscriber can never
//! observe a half-applied change. Only the notification service mutates the
//! store; everything else reads snapshots or subscribes to them.

use super::notification::{Toast, ToastId};
use std::collections::HashSet;
use std::rc::Rc;

/// Immutable view of the store contents, in insertion order.
pub type Snapshot = Rc<[Toast]>;

/// Callback invoked with the new snapshot after every effective mutation.
pub type Subscriber = Box<dyn FnMut(&Snapshot)>;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subscribers detached from the store while they are being notified.
///
/// Notification happens outside any borrow of the store so that callbacks
/// may add or remove toasts themselves.
pub(crate) struct Dispatch {
    entries: Vec<(SubscriptionId, Subscriber)>,
}

impl Dispatch {
    pub(crate) fn notify(&mut self, snapshot: &Snapshot) {
        for (_, subscriber) in &mut self.entries {
            subscriber(snapshot);
        }
    }
}

/// Ordered sequence of active toasts plus the callbacks observing it.
pub struct MessageStore {
    messages: Snapshot,
    revision: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    /// Subscriptions currently handed out in a `Dispatch`.
    in_flight: HashSet<SubscriptionId>,
    /// In-flight subscriptions that were cancelled while being notified.
    detached: HashSet<SubscriptionId>,
}

impl std::fmt::Debug for MessageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageStore")
            .field("messages", &self.messages)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: Rc::from(Vec::new()),
            revision: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
            in_flight: HashSet::new(),
            detached: HashSet::new(),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Rc::clone(&self.messages)
    }

    /// Returns the current toasts, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Toast] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns whether a toast with this id is currently stored.
    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.messages.iter().any(|toast| toast.id() == id)
    }

    /// Returns a counter bumped by every effective mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len() + self.in_flight.len() - self.detached.len()
    }

    pub(crate) fn subscribe(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    /// Cancels a subscription. Returns `true` if it was live.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if let Some(pos) = self.subscribers.iter().position(|(sub, _)| *sub == id) {
            self.subscribers.remove(pos);
            return true;
        }

        self.in_flight.contains(&id) && self.detached.insert(id)
    }

    /// Appends a toast at the end of the sequence.
    pub(crate) fn append(&mut self, toast: Toast) {
        debug_assert!(!self.contains(toast.id()), "duplicate toast id");

        let mut next = Vec::with_capacity(self.messages.len() + 1);
        next.extend(self.messages.iter().cloned());
        next.push(toast);
        self.replace(next);
    }

    /// Removes the toast with this id. Returns `false` (and leaves the
    /// snapshot untouched) when no such toast exists.
    pub(crate) fn remove(&mut self, id: &ToastId) -> bool {
        if !self.contains(id) {
            return false;
        }

        let next: Vec<Toast> = self
            .messages
            .iter()
            .filter(|toast| toast.id() != id)
            .cloned()
            .collect();
        self.replace(next);
        true
    }

    /// Removes every toast. Returns `false` if the store was already empty.
    pub(crate) fn clear(&mut self) -> bool {
        if self.messages.is_empty() {
            return false;
        }
        self.replace(Vec::new());
        true
    }

    /// Hands the subscribers out for notification.
    pub(crate) fn detach_subscribers(&mut self) -> Dispatch {
        let entries = std::mem::take(&mut self.subscribers);
        self.in_flight.extend(entries.iter().map(|(id, _)| *id));
        Dispatch { entries }
    }

    /// Takes subscribers back after notification, dropping the ones that
    /// unsubscribed meanwhile. Subscriptions made during notification stay
    /// after the returning ones.
    pub(crate) fn reattach_subscribers(&mut self, dispatch: Dispatch) {
        let mut entries = dispatch.entries;
        for (id, _) in &entries {
            self.in_flight.remove(id);
        }
        entries.retain(|(id, _)| !self.detached.remove(id));
        entries.append(&mut self.subscribers);
        self.subscribers = entries;
    }

    /// Drops every subscription.
    pub(crate) fn drop_subscribers(&mut self) {
        self.subscribers.clear();
        self.detached.extend(self.in_flight.iter().copied());
    }

    fn replace(&mut self, next: Vec<Toast>) {
        self.messages = Rc::from(next);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::NewToast;
    use std::cell::RefCell;

    fn toast(id: &str, title: &str) -> Toast {
        NewToast::info(title).into_toast(ToastId::from(id))
    }

    fn ids(store: &MessageStore) -> Vec<&str> {
        store.messages().iter().map(|t| t.id().as_str()).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = MessageStore::new();
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = MessageStore::new();
        store.append(toast("a1", "first"));
        store.append(toast("a2", "second"));
        store.append(toast("a3", "third"));

        assert_eq!(ids(&store), vec!["a1", "a2", "a3"]);
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn remove_only_touches_matching_toast() {
        let mut store = MessageStore::new();
        store.append(toast("a1", "first"));
        store.append(toast("a2", "second"));
        store.append(toast("a3", "third"));
        let before = store.messages()[2].clone();

        assert!(store.remove(&ToastId::from("a2")));

        assert_eq!(ids(&store), vec!["a1", "a3"]);
        assert_eq!(store.messages()[1], before);
    }

    #[test]
    fn remove_missing_id_keeps_snapshot_and_revision() {
        let mut store = MessageStore::new();
        store.append(toast("a1", "first"));
        let snapshot = store.snapshot();
        let revision = store.revision();

        assert!(!store.remove(&ToastId::from("zz")));

        assert!(Rc::ptr_eq(&snapshot, &store.snapshot()));
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn mutation_replaces_snapshot_wholesale() {
        let mut store = MessageStore::new();
        store.append(toast("a1", "first"));
        let old = store.snapshot();

        store.append(toast("a2", "second"));

        assert_eq!(old.len(), 1);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn clear_on_empty_store_is_not_a_mutation() {
        let mut store = MessageStore::new();
        assert!(!store.clear());
        assert_eq!(store.revision(), 0);

        store.append(toast("a1", "first"));
        assert!(store.clear());
        assert!(store.is_empty());
    }

    #[test]
    fn dispatch_notifies_subscribers_with_snapshot() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = MessageStore::new();
        let sink = Rc::clone(&seen);
        store.subscribe(Box::new(move |snapshot: &Snapshot| {
            sink.borrow_mut().push(snapshot.len());
        }));

        store.append(toast("a1", "first"));
        let snapshot = store.snapshot();
        let mut dispatch = store.detach_subscribers();
        dispatch.notify(&snapshot);
        store.reattach_subscribers(dispatch);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn unsubscribe_during_dispatch_drops_subscription() {
        let mut store = MessageStore::new();
        let id = store.subscribe(Box::new(|_: &Snapshot| {}));

        let dispatch = store.detach_subscribers();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.reattach_subscribers(dispatch);

        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscribe_during_dispatch_is_kept() {
        let mut store = MessageStore::new();
        store.subscribe(Box::new(|_: &Snapshot| {}));

        let dispatch = store.detach_subscribers();
        store.subscribe(Box::new(|_: &Snapshot| {}));
        store.reattach_subscribers(dispatch);

        assert_eq!(store.subscriber_count(), 2);
    }
}
