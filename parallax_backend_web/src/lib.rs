// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for parallax.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomElement`] / [`DomResolver`]: selector lookup and element movement
//! - [`ParallaxEngine`]: the caller-held engine handle that wires
//!   mouse and touch listeners and drives the momentum loop with `setTimeout`
//! - [`ConsoleSink`]: trace output to the browser console

#![no_std]

extern crate alloc;

mod console;
mod element;
mod engine;

pub use console::ConsoleSink;
pub use element::{DomElement, DomResolver};
pub use engine::ParallaxEngine;
pub use parallax_core::element::{ElementResolver, SpriteElement};

use parallax_core::time::{HostTime, Timebase};
use wasm_bindgen::prelude::*;

// Global bindings, so event handlers never go through `Window`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, millis: i32) -> i32;
}

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks. Use [`timebase`] to
/// convert to nanoseconds.
#[must_use]
pub fn now() -> HostTime {
    millis_to_host_time(performance_now())
}

/// Returns the web [`Timebase`]: 1 tick = 1 µs = 1000 ns.
#[must_use]
pub fn timebase() -> Timebase {
    Timebase::MICROS
}

fn millis_to_host_time(ms: f64) -> HostTime {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns small positive f64; µs fits in u64"
    )]
    let us = (ms * 1000.0) as u64;
    HostTime(us)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parallax_core::momentum::MomentumConfig;

    #[test]
    fn timebase_is_microsecond() {
        let tb = timebase();
        assert_eq!(tb.ticks_to_nanos(1), 1000);
        assert_eq!(tb.ticks_to_nanos(1_000_000), 1_000_000_000);
    }

    #[test]
    fn default_momentum_matches_web_timebase() {
        let tick = MomentumConfig::DEFAULT.tick_interval;
        assert_eq!(tick.as_millis_f64(timebase()), 30.0);
    }

    #[test]
    fn millis_convert_to_microsecond_ticks() {
        assert_eq!(millis_to_host_time(16.5), HostTime(16_500));
        assert_eq!(millis_to_host_time(-1.0), HostTime(0), "saturates");
    }
}
