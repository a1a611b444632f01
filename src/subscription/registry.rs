// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered subscriber registry with identity-based removal.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::subscription::SubscriberHandle;
use crate::types::Notification;

/// Ordered list of subscriber handles.
///
/// The list preserves insertion order, permits duplicate handles, and
/// removes by handle identity. It uses interior mutability via
/// `parking_lot::RwLock`, so registration and fan-out take `&self` and the
/// list can be shared behind the publisher without external locking.
///
/// # Ordering
///
/// Notifications are delivered in registration order. Removing entries
/// never reorders the survivors.
pub struct SubscriberList {
    subscribers: RwLock<Vec<SubscriberHandle>>,
}

impl SubscriberList {
    /// Creates a new empty subscriber list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Appends a subscriber handle to the list.
    ///
    /// Always succeeds. No duplicate check is performed: registering the
    /// same handle twice yields two entries, both notified per fan-out.
    pub fn register(&self, subscriber: SubscriberHandle) {
        self.subscribers.write().push(subscriber);
    }

    /// Removes every entry matching the given handle's identity.
    ///
    /// Matching is by `Arc::ptr_eq`, so a separately constructed subscriber
    /// of the same type is never removed by mistake. Unregistering a handle
    /// that was never registered is a no-op. Surviving entries keep their
    /// relative order.
    pub fn unregister(&self, subscriber: &SubscriberHandle) {
        self.subscribers
            .write()
            .retain(|entry| !Arc::ptr_eq(entry, subscriber));
    }

    /// Invokes every registered subscriber with the given notification.
    ///
    /// Delivery is synchronous and in registration order. The list is
    /// snapshotted before dispatch, so a subscriber may register or
    /// unregister handles from inside its handler without deadlocking;
    /// such changes only affect later fan-outs.
    pub fn notify_all(&self, notification: Notification) {
        let snapshot: Vec<SubscriberHandle> = self.subscribers.read().clone();
        for subscriber in &snapshot {
            subscriber.on_notification(notification);
        }
    }

    /// Returns the number of registered entries (duplicates counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Returns `true` if no subscribers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.read().is_empty()
    }
}

impl Default for SubscriberList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SubscriberList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberList")
            .field("subscriber_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::subscription::Subscriber;

    struct Counting {
        calls: AtomicU32,
    }

    impl Counting {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicU32::new(0),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Subscriber for Counting {
        fn on_notification(&self, _notification: Notification) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn new_list_is_empty() {
        let list = SubscriberList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn register_appends() {
        let list = SubscriberList::new();
        list.register(Counting::new());
        assert_eq!(list.len(), 1);

        list.register(Counting::new());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn notify_all_reaches_every_subscriber() {
        let list = SubscriberList::new();
        let first = Counting::new();
        let second = Counting::new();
        list.register(first.clone());
        list.register(second.clone());

        list.notify_all(Notification::LowPower);

        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
    }

    #[test]
    fn duplicate_registration_notifies_twice() {
        let list = SubscriberList::new();
        let subscriber = Counting::new();
        let handle: SubscriberHandle = subscriber.clone();
        list.register(Arc::clone(&handle));
        list.register(Arc::clone(&handle));

        list.notify_all(Notification::LowPower);

        assert_eq!(subscriber.calls(), 2);
    }

    #[test]
    fn unregister_removes_all_matching_entries() {
        let list = SubscriberList::new();
        let subscriber = Counting::new();
        let handle: SubscriberHandle = subscriber.clone();
        list.register(Arc::clone(&handle));
        list.register(Arc::clone(&handle));
        assert_eq!(list.len(), 2);

        list.unregister(&handle);
        assert!(list.is_empty());

        list.notify_all(Notification::LowPower);
        assert_eq!(subscriber.calls(), 0);
    }

    #[test]
    fn unregister_matches_identity_not_type() {
        let list = SubscriberList::new();
        let registered = Counting::new();
        list.register(registered.clone());

        // Same type, different allocation: must not be removed.
        let other: SubscriberHandle = Counting::new();
        list.unregister(&other);

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn unregister_unknown_is_noop() {
        let list = SubscriberList::new();
        let never_registered: SubscriberHandle = Counting::new();

        list.unregister(&never_registered);
        assert!(list.is_empty());
    }

    #[test]
    fn unregister_preserves_order_of_survivors() {
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));

        struct Named {
            name: &'static str,
            order: Arc<parking_lot::Mutex<Vec<&'static str>>>,
        }

        impl Subscriber for Named {
            fn on_notification(&self, _notification: Notification) {
                self.order.lock().push(self.name);
            }
        }

        let list = SubscriberList::new();
        let first: SubscriberHandle = Arc::new(Named {
            name: "first",
            order: order.clone(),
        });
        let second: SubscriberHandle = Arc::new(Named {
            name: "second",
            order: order.clone(),
        });
        let third: SubscriberHandle = Arc::new(Named {
            name: "third",
            order: order.clone(),
        });

        list.register(Arc::clone(&first));
        list.register(Arc::clone(&second));
        list.register(Arc::clone(&third));
        list.unregister(&second);

        list.notify_all(Notification::LowPower);

        assert_eq!(*order.lock(), vec!["first", "third"]);
    }

    #[test]
    fn handler_may_unregister_during_fanout() {
        struct SelfRemoving {
            list: Arc<SubscriberList>,
            target: parking_lot::Mutex<Option<SubscriberHandle>>,
        }

        impl Subscriber for SelfRemoving {
            fn on_notification(&self, _notification: Notification) {
                if let Some(handle) = self.target.lock().take() {
                    self.list.unregister(&handle);
                }
            }
        }

        let list = Arc::new(SubscriberList::new());
        let victim: SubscriberHandle = Counting::new();
        let remover = Arc::new(SelfRemoving {
            list: Arc::clone(&list),
            target: parking_lot::Mutex::new(Some(Arc::clone(&victim))),
        });

        list.register(remover);
        list.register(victim);
        assert_eq!(list.len(), 2);

        // Must not deadlock; removal takes effect for later fan-outs.
        list.notify_all(Notification::LowPower);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn list_debug() {
        let list = SubscriberList::new();
        list.register(Counting::new());

        let debug = format!("{list:?}");
        assert!(debug.contains("SubscriberList"));
        assert!(debug.contains("subscriber_count"));
    }
}
