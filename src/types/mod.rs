// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for battery monitoring.
//!
//! This module provides type-safe representations of the values flowing
//! through the notification system. Each type ensures values are within
//! their valid ranges at construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`BatteryLevel`] - Charge level as a percentage (0-100)
//! - [`Notification`] - Message pushed to subscribers on fan-out

mod battery_level;
mod notification;

pub use battery_level::BatteryLevel;
pub use notification::Notification;
