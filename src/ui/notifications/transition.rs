// SPDX-License-Identifier: MPL-2.0
//! Enter/leave animation state for rendered toasts.
//!
//! Each rendered toast carries a small state machine:
//!
//! ```text
//! Entering ──(enter done)──> Present
//!     │                         │
//!     └──(removed from store)───┴──> Leaving ──(leave done)──> Removed
//! ```
//!
//! `ToastLayer` keeps one `Presence` per toast id. It listens to the
//! notification service, and on the next `advance` reconciles the latest store
//! contents against what it is currently showing: new ids start entering,
//! missing ids start leaving in place, and leaving toasts are unmounted once
//! their animation completes. Nothing here touches Iced, so the whole
//! lifecycle can be driven with synthetic instants.

use super::notification::{Toast, ToastId};
use super::service::NotificationService;
use super::store::{Snapshot, SubscriptionId};
use crate::config::{NotificationsConfig, DEFAULT_TOAST_ENTER_MS, DEFAULT_TOAST_LEAVE_MS};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Horizontal offset of a hidden toast, as a fraction of its width past the
/// right edge.
pub const HIDDEN_OFFSET: f32 = 1.2;

/// Lifecycle phase of a rendered toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sliding in from the right edge.
    Entering,
    /// Fully visible.
    Present,
    /// Sliding back out after removal.
    Leaving,
    /// Animation finished; about to be unmounted.
    Removed,
}

/// Durations of the enter and leave animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimings {
    pub enter: Duration,
    pub leave: Duration,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(DEFAULT_TOAST_ENTER_MS),
            leave: Duration::from_millis(DEFAULT_TOAST_LEAVE_MS),
        }
    }
}

impl From<&NotificationsConfig> for TransitionTimings {
    fn from(config: &NotificationsConfig) -> Self {
        Self {
            enter: config.enter(),
            leave: config.leave(),
        }
    }
}

/// Animation state of a single toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presence {
    phase: Phase,
    started_at: Instant,
    /// Offset the running animation started from.
    from: f32,
}

impl Presence {
    /// Starts the enter animation at `now`.
    #[must_use]
    pub fn entering(now: Instant) -> Self {
        Self {
            phase: Phase::Entering,
            started_at: now,
            from: HIDDEN_OFFSET,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the interpolated horizontal offset at `now`.
    #[must_use]
    pub fn offset(&self, now: Instant, timings: TransitionTimings) -> f32 {
        match self.phase {
            Phase::Entering => {
                let t = progress(self.started_at, now, timings.enter);
                lerp(self.from, 0.0, ease_out_cubic(t))
            }
            Phase::Present => 0.0,
            Phase::Leaving => {
                let t = progress(self.started_at, now, timings.leave);
                lerp(self.from, HIDDEN_OFFSET, ease_in_cubic(t))
            }
            Phase::Removed => HIDDEN_OFFSET,
        }
    }

    /// Starts the leave animation from wherever the toast currently is.
    /// Has no effect once the toast is already leaving.
    pub fn leave(&mut self, now: Instant, timings: TransitionTimings) {
        if matches!(self.phase, Phase::Entering | Phase::Present) {
            self.from = self.offset(now, timings);
            self.phase = Phase::Leaving;
            self.started_at = now;
        }
    }

    /// Moves to the next phase once the running animation has finished.
    pub fn step(&mut self, now: Instant, timings: TransitionTimings) -> Phase {
        match self.phase {
            Phase::Entering if progress(self.started_at, now, timings.enter) >= 1.0 => {
                self.phase = Phase::Present;
            }
            Phase::Leaving if progress(self.started_at, now, timings.leave) >= 1.0 => {
                self.phase = Phase::Removed;
            }
            _ => {}
        }
        self.phase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Leaving)
    }
}

/// A toast currently mounted in the overlay.
#[derive(Debug, Clone)]
pub struct ToastEntry {
    toast: Toast,
    presence: Presence,
}

impl ToastEntry {
    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.presence.phase()
    }
}

/// Keyed list of mounted toasts and their animation state.
#[derive(Debug)]
pub struct ToastLayer {
    entries: Vec<ToastEntry>,
    timings: TransitionTimings,
    /// Latest store contents not yet reconciled.
    inbox: Rc<RefCell<Option<Snapshot>>>,
    subscription: Option<(NotificationService, SubscriptionId)>,
}

impl ToastLayer {
    /// Creates a detached layer, fed through [`reconcile`](Self::reconcile).
    #[must_use]
    pub fn new(timings: TransitionTimings) -> Self {
        Self {
            entries: Vec::new(),
            timings,
            inbox: Rc::new(RefCell::new(None)),
            subscription: None,
        }
    }

    /// Creates a layer that follows `service`. Store changes are picked up on
    /// the next [`advance`](Self::advance).
    #[must_use]
    pub fn attach(service: &NotificationService, timings: TransitionTimings) -> Self {
        let mut layer = Self::new(timings);
        *layer.inbox.borrow_mut() = Some(service.messages());

        let inbox: Weak<RefCell<Option<Snapshot>>> = Rc::downgrade(&layer.inbox);
        let subscription = service.subscribe(move |snapshot| {
            if let Some(inbox) = inbox.upgrade() {
                *inbox.borrow_mut() = Some(Rc::clone(snapshot));
            }
        });
        layer.subscription = Some((service.clone(), subscription));
        layer
    }

    /// Diffs `current` against the mounted toasts, keyed by id.
    pub fn reconcile(&mut self, current: &[Toast], now: Instant) {
        let timings = self.timings;
        let live: HashSet<&ToastId> = current.iter().map(Toast::id).collect();

        for entry in &mut self.entries {
            if !live.contains(entry.toast.id()) {
                entry.presence.leave(now, timings);
            }
        }

        for toast in current {
            let mounted = self.entries.iter().any(|entry| entry.toast.id() == toast.id());
            if !mounted {
                self.entries.push(ToastEntry {
                    toast: toast.clone(),
                    presence: Presence::entering(now),
                });
            }
        }
    }

    /// Applies pending store changes, advances every animation to `now` and
    /// unmounts toasts whose leave animation finished. Returns the ids
    /// unmounted by this call.
    pub fn advance(&mut self, now: Instant) -> Vec<ToastId> {
        let pending = self.inbox.borrow_mut().take();
        if let Some(snapshot) = pending {
            self.reconcile(&snapshot, now);
        }

        let timings = self.timings;
        let mut unmounted = Vec::new();
        for entry in &mut self.entries {
            if entry.presence.step(now, timings) == Phase::Removed {
                unmounted.push(entry.toast.id().clone());
            }
        }
        self.entries
            .retain(|entry| entry.presence.phase() != Phase::Removed);

        unmounted
    }

    /// Returns the mounted toasts in display order.
    #[must_use]
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    /// Returns each mounted toast with its offset at `now`.
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = (&Toast, f32)> + '_ {
        let timings = self.timings;
        self.entries
            .iter()
            .map(move |entry| (&entry.toast, entry.presence.offset(now, timings)))
    }

    /// Returns the phase of a mounted toast.
    #[must_use]
    pub fn phase_of(&self, id: &ToastId) -> Option<Phase> {
        self.entries
            .iter()
            .find(|entry| entry.toast.id() == id)
            .map(ToastEntry::phase)
    }

    /// Returns whether any toast is mid-animation or a store change is
    /// waiting to be reconciled.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.has_pending_update() || self.entries.iter().any(|entry| entry.presence.is_animating())
    }

    #[must_use]
    pub fn has_pending_update(&self) -> bool {
        self.inbox.borrow().is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn timings(&self) -> TransitionTimings {
        self.timings
    }
}

impl Drop for ToastLayer {
    fn drop(&mut self) {
        if let Some((service, subscription)) = self.subscription.take() {
            service.unsubscribe(subscription);
        }
    }
}

/// Linear progress of an animation in `[0, 1]`.
fn progress(started_at: Instant, now: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
    (elapsed / duration.as_secs_f32()).min(1.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}
