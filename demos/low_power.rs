// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Low-power notification walkthrough.
//!
//! Registers a display and an audio subscriber, then reports a draining
//! battery. Run with `cargo run --example low_power`.

use std::sync::Arc;

use battwatch::subscription::SubscriberHandle;
use battwatch::{AudioSubscriber, BatteryLevel, BatteryMonitor, DisplaySubscriber};

fn main() -> battwatch::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let monitor = BatteryMonitor::new();

    let display: SubscriberHandle = Arc::new(DisplaySubscriber::new());
    let audio: SubscriberHandle = Arc::new(AudioSubscriber::new());

    monitor.register(Arc::clone(&display));
    monitor.register(Arc::clone(&audio));

    for value in [50, 40, 31, 20] {
        monitor.report_level(BatteryLevel::new(value)?);
    }

    // Drop the display readout to save power; keep only the audio cue.
    monitor.unregister(&display);

    for value in [15, 10] {
        monitor.report_level(BatteryLevel::new(value)?);
    }

    Ok(())
}
