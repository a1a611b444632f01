// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ready-made subscriber implementations.
//!
//! Two behaviorally identical variants that print each notification to
//! stdout with an identifying label:
//!
//! - [`DisplaySubscriber`] - labeled `Display`
//! - [`AudioSubscriber`] - labeled `Audio`
//!
//! They exist as reference implementations and for the demo driver; real
//! consumers usually implement [`Subscriber`](crate::subscription::Subscriber)
//! themselves.

mod audio;
mod display;

pub use audio::AudioSubscriber;
pub use display::DisplaySubscriber;
