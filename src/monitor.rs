// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery monitor: the publisher side of the notification system.

use crate::subscription::{SubscriberHandle, SubscriberList};
use crate::types::{BatteryLevel, Notification};

/// Publisher that tracks reported battery levels and fans out
/// [`Notification::LowPower`] when a level crosses the threshold.
///
/// The monitor owns an ordered [`SubscriberList`]; registration order is
/// delivery order. Evaluation is level-triggered: no previous level is
/// retained, so every report at or below
/// [`LOW_POWER_THRESHOLD`](Self::LOW_POWER_THRESHOLD) notifies again.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use battwatch::{BatteryLevel, BatteryMonitor, DisplaySubscriber};
///
/// # fn main() -> battwatch::Result<()> {
/// let monitor = BatteryMonitor::new();
/// monitor.register(Arc::new(DisplaySubscriber::new()));
///
/// monitor.report_level(BatteryLevel::new(50)?); // silent
/// monitor.report_level(BatteryLevel::new(25)?); // prints "Display :: LOW_POWER"
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct BatteryMonitor {
    subscribers: SubscriberList,
}

impl BatteryMonitor {
    /// Level at or below which every report fans out a low-power
    /// notification.
    pub const LOW_POWER_THRESHOLD: BatteryLevel = BatteryLevel::clamped(30);

    /// Reserved lower tier for audio-only alerting.
    ///
    /// Not consulted by any branch yet; kept so the tier boundary stays in
    /// one place if the selective fan-out ever lands. Behavior today is
    /// single-threshold.
    pub const AUDIO_ONLY_THRESHOLD: BatteryLevel = BatteryLevel::clamped(15);

    /// Creates a new monitor with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: SubscriberList::new(),
        }
    }

    /// Registers a subscriber for low-power notifications.
    ///
    /// Appends to the fan-out order; duplicates are permitted and each
    /// entry is notified separately.
    pub fn register(&self, subscriber: SubscriberHandle) {
        self.subscribers.register(subscriber);
    }

    /// Unregisters a subscriber by handle identity.
    ///
    /// Removes every matching entry from future fan-outs. Unregistering a
    /// handle that was never registered is a no-op.
    pub fn unregister(&self, subscriber: &SubscriberHandle) {
        self.subscribers.unregister(subscriber);
    }

    /// Returns the number of registered entries (duplicates counted).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Reports a new battery level to the monitor.
    ///
    /// Records the level and, when it is at or below
    /// [`LOW_POWER_THRESHOLD`](Self::LOW_POWER_THRESHOLD), synchronously
    /// notifies every currently registered subscriber in registration
    /// order. Cannot fail; delivery has no error path.
    pub fn report_level(&self, level: BatteryLevel) {
        tracing::info!(level = %level, "Battery level reported");

        if level <= Self::LOW_POWER_THRESHOLD {
            tracing::debug!(
                level = %level,
                subscribers = self.subscribers.len(),
                "Low power, notifying subscribers"
            );
            self.subscribers.notify_all(Notification::LowPower);
        }
    }
}
