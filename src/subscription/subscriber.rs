// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscriber trait for receiving pushed notifications.

use std::sync::Arc;

use crate::types::Notification;

/// Trait for entities that can receive a pushed notification.
///
/// Implementors are stateless reactive capabilities: the monitor invokes
/// [`on_notification`](Subscriber::on_notification) zero or more times, in
/// registration order relative to other subscribers, and expects no result.
/// There is no failure mode; a subscriber that needs to report problems
/// should do so through its own channels (e.g. logging).
///
/// # Examples
///
/// ```
/// use battwatch::subscription::Subscriber;
/// use battwatch::types::Notification;
///
/// struct StatusBar;
///
/// impl Subscriber for StatusBar {
///     fn on_notification(&self, notification: Notification) {
///         println!("status: {notification}");
///     }
/// }
/// ```
pub trait Subscriber: Send + Sync {
    /// Called by the publisher when its notification condition fires.
    fn on_notification(&self, notification: Notification);
}

/// Shared handle to a registered subscriber.
///
/// The monitor holds one clone of the handle per registration; the driver
/// typically keeps another so it can unregister later. Identity comparisons
/// (`Arc::ptr_eq`) determine which entries an unregistration removes.
pub type SubscriberHandle = Arc<dyn Subscriber>;
