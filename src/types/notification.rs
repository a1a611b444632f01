// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Notification type pushed to subscribers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message pushed to every registered subscriber when the monitor's
/// condition fires.
///
/// The set of notifications is closed, so this is an enum rather than a
/// free-form string. The wire/display form of each variant is its
/// screaming-snake-case name.
///
/// # Examples
///
/// ```
/// use battwatch::types::Notification;
///
/// assert_eq!(Notification::LowPower.as_str(), "LOW_POWER");
/// assert_eq!(Notification::LowPower.to_string(), "LOW_POWER");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Notification {
    /// The battery level dropped to or below the low-power threshold.
    LowPower,
}

impl Notification {
    /// Returns the notification message as a static string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LowPower => "LOW_POWER",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
