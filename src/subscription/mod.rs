// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for low-power notifications.
//!
//! This module provides the observer-pattern plumbing used by the
//! [`BatteryMonitor`](crate::BatteryMonitor):
//!
//! - [`Subscriber`] - Trait for anything that can receive a notification
//! - [`SubscriberHandle`] - Shared, identity-comparable handle to a subscriber
//! - [`SubscriberList`] - Ordered registry that fans notifications out
//!
//! # Identity Semantics
//!
//! Handles are compared by identity (`Arc::ptr_eq`), not by value. Two
//! separately constructed subscribers of the same type are distinct entries;
//! registering one handle twice yields two entries, both notified per
//! fan-out. Unregistration removes every entry matching the given handle's
//! identity and is a no-op when none match.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use battwatch::subscription::{Subscriber, SubscriberList};
//! use battwatch::types::Notification;
//!
//! struct Bell;
//!
//! impl Subscriber for Bell {
//!     fn on_notification(&self, notification: Notification) {
//!         println!("ding: {notification}");
//!     }
//! }
//!
//! let list = SubscriberList::new();
//! list.register(Arc::new(Bell));
//! list.notify_all(Notification::LowPower);
//! ```

mod registry;
mod subscriber;

pub use registry::SubscriberList;
pub use subscriber::{Subscriber, SubscriberHandle};
