// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display subscriber variant.

use crate::subscription::Subscriber;
use crate::types::Notification;

/// Subscriber that renders notifications on a display.
///
/// Prints `Display :: <message>` to stdout for every received
/// notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplaySubscriber;

impl DisplaySubscriber {
    /// Label printed in front of every notification.
    pub const LABEL: &'static str = "Display";

    /// Creates a new display subscriber.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the identifying label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        Self::LABEL
    }
}

impl Subscriber for DisplaySubscriber {
    fn on_notification(&self, notification: Notification) {
        println!("{} :: {notification}", Self::LABEL);
    }
}
