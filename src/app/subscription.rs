// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::FRAME_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the frame tick subscription.
///
/// Ticks only run while something is animating or waiting on a timer so an
/// idle window does not wake up.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
