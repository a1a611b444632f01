// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `BattWatch` - A Rust library for battery level monitoring with
//! publish/subscribe notifications.
//!
//! This library implements the observer pattern around a single condition:
//! a [`BatteryMonitor`] holds a dynamic list of subscribers and pushes a
//! low-power notification to every one of them, in registration order,
//! whenever a reported battery level is at or below the low-power
//! threshold (30%).
//!
//! # Design
//!
//! - **Subscribers are trait objects**: anything implementing
//!   [`Subscriber`](subscription::Subscriber) can be registered, wrapped in
//!   an `Arc` so the driver and the monitor share ownership of the handle.
//! - **Identity, not equality**: unregistering removes entries by handle
//!   identity (`Arc::ptr_eq`). Registering the same handle twice yields two
//!   entries and two notifications per qualifying report.
//! - **Level-triggered**: no previous level is retained. Every report at or
//!   below the threshold fans out again.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use battwatch::{AudioSubscriber, BatteryLevel, BatteryMonitor, DisplaySubscriber};
//! use battwatch::subscription::SubscriberHandle;
//!
//! # fn main() -> battwatch::Result<()> {
//! let monitor = BatteryMonitor::new();
//!
//! let display: SubscriberHandle = Arc::new(DisplaySubscriber::new());
//! let audio: SubscriberHandle = Arc::new(AudioSubscriber::new());
//!
//! monitor.register(Arc::clone(&display));
//! monitor.register(audio);
//!
//! // Above the threshold: nothing is delivered.
//! monitor.report_level(BatteryLevel::new(50)?);
//!
//! // At or below 30%: every subscriber prints "<Label> :: LOW_POWER".
//! monitor.report_level(BatteryLevel::new(20)?);
//!
//! // Unregistered subscribers drop out of future fan-outs only.
//! monitor.unregister(&display);
//! monitor.report_level(BatteryLevel::new(10)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Subscribers
//!
//! ```
//! use battwatch::subscription::Subscriber;
//! use battwatch::types::Notification;
//!
//! struct Logger;
//!
//! impl Subscriber for Logger {
//!     fn on_notification(&self, notification: Notification) {
//!         tracing::warn!(notification = %notification, "battery is low");
//!     }
//! }
//! ```

pub mod error;
mod monitor;
pub mod subscribers;
pub mod subscription;
pub mod types;

pub use error::{Error, Result, ValueError};
pub use monitor::BatteryMonitor;
pub use subscribers::{AudioSubscriber, DisplaySubscriber};
pub use subscription::{Subscriber, SubscriberHandle, SubscriberList};
pub use types::{BatteryLevel, Notification};
