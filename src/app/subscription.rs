// SPDX-License-Identifier: MPL-2.0
//! Subscription management for the application.
//!
//! Both subscriptions are idle unless there is work: the tick runs only
//! while an expiry timer is pending and the frame stream only while a toast
//! is entering or leaving.

use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Resolution of toast expiry checks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the periodic tick that fires due expiry timers.
pub fn create_tick_subscription(pending_timers: usize) -> Subscription<Message> {
    if pending_timers > 0 {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the per-frame subscription that drives toast transitions.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
