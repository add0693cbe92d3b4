// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace output to the browser console.

use alloc::format;
use alloc::string::String;

use parallax_core::time::{Duration, HostTime};
use parallax_core::trace::{
    DecayStopEvent, DecayTickEvent, DragBeginEvent, DragEndEvent, DragMoveEvent, ScrollEvent,
    SpriteAddedEvent, TraceSink,
};
use wasm_bindgen::JsValue;

/// Writes one `console.debug` line per engine event.
///
/// Scroll events fire on every drag move and glide tick; they are only
/// logged when `verbose` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that skips per-scroll lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that also logs every scroll.
    #[must_use]
    pub fn verbose() -> Self {
        Self { verbose: true }
    }

    fn emit(&self, line: &str) {
        web_sys::console::debug_1(&JsValue::from_str(line));
    }
}

fn ms(t: HostTime) -> f64 {
    Duration(t.ticks()).as_millis_f64(crate::timebase())
}

fn sprite_added_line(e: &SpriteAddedEvent) -> String {
    format!(
        "[parallax:sprite] #{} speed={} at=({}, {})",
        e.index, e.speed, e.position.x, e.position.y
    )
}

fn decay_stop_line(e: &DecayStopEvent) -> String {
    format!(
        "[parallax:decay:stop] glide={} reason={:?} t={:.1}ms",
        e.generation,
        e.reason,
        ms(e.at)
    )
}

impl TraceSink for ConsoleSink {
    fn on_sprite_added(&mut self, e: &SpriteAddedEvent) {
        self.emit(&sprite_added_line(e));
    }

    fn on_scroll(&mut self, e: &ScrollEvent) {
        if self.verbose {
            self.emit(&format!(
                "[parallax:scroll] dx={:.2} dy={:.2} sprites={}",
                e.delta.x, e.delta.y, e.sprite_count
            ));
        }
    }

    fn on_drag_begin(&mut self, e: &DragBeginEvent) {
        self.emit(&format!(
            "[parallax:drag:begin] x={} t={:.1}ms",
            e.x,
            ms(e.at)
        ));
    }

    fn on_drag_move(&mut self, e: &DragMoveEvent) {
        if self.verbose {
            self.emit(&format!(
                "[parallax:drag:move] dx={} dt={:.1}ms",
                e.dx,
                e.dt.as_millis_f64(crate::timebase())
            ));
        }
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        self.emit(&format!(
            "[parallax:drag:end] glide={} velocity={:.2}",
            e.generation, e.velocity
        ));
    }

    fn on_decay_tick(&mut self, e: &DecayTickEvent) {
        if self.verbose {
            self.emit(&format!(
                "[parallax:decay] glide={} tick={} dx={:.3}",
                e.generation, e.tick, e.dx
            ));
        }
    }

    fn on_decay_stop(&mut self, e: &DecayStopEvent) {
        self.emit(&decay_stop_line(e));
    }
}
