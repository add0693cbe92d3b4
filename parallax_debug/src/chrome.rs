// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] writes events captured by a
//! [`RecorderSink`](super::recorder::RecorderSink) as
//! [Chrome Trace Event Format][format] JSON.
//!
//! A drag becomes a duration slice from `DragBegin` to `DragEnd`. Each glide
//! becomes an async slice keyed by its generation, from `DragEnd` to whichever
//! comes first: its `DecayStop`, or the next `DragBegin` that canceled it. A
//! timer that fires after its glide was closed shows up as an `InertTick`
//! instant. Moves and ticks are instant events; glide velocity is a counter.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use parallax_core::time::{HostTime, Timebase};

use crate::recorder::RecordedEvent;

const TID_DRAG: u32 = 0;
const TID_GLIDE: u32 = 1;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
/// Untimed events (sprite registration, scrolls) are stamped with the most
/// recent timestamp seen, or zero before any.
pub fn export(
    recorded: &[RecordedEvent],
    timebase: Timebase,
    writer: &mut dyn Write,
) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut last = 0.0;
    // Generation of the glide whose slice is open.
    let mut open_glide: Option<u64> = None;

    for event in recorded {
        if let Some(at) = event.at() {
            last = to_us(at, timebase);
        }
        match event {
            RecordedEvent::SpriteAdded(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "SpriteAdded",
                    "cat": "Setup",
                    "ts": last,
                    "pid": 0,
                    "tid": TID_DRAG,
                    "s": "p",
                    "args": {
                        "index": e.index,
                        "speed": e.speed,
                        "x": e.position.x,
                        "y": e.position.y,
                    }
                }));
            }
            RecordedEvent::Scroll(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Scroll",
                    "cat": "Scene",
                    "ts": last,
                    "pid": 0,
                    "tid": TID_DRAG,
                    "s": "t",
                    "args": {
                        "dx": e.delta.x,
                        "dy": e.delta.y,
                        "animate_ms": e.duration.as_millis_f64(timebase),
                        "sprites": e.sprite_count,
                    }
                }));
            }
            RecordedEvent::DragBegin(e) => {
                if let Some(generation) = open_glide.take() {
                    events.push(glide_end(generation, last, "Interrupted"));
                }
                events.push(json!({
                    "ph": "B",
                    "name": "Drag",
                    "cat": "Input",
                    "ts": last,
                    "pid": 0,
                    "tid": TID_DRAG,
                    "args": { "x": e.x }
                }));
            }
            RecordedEvent::DragMove(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "DragMove",
                    "cat": "Input",
                    "ts": last,
                    "pid": 0,
                    "tid": TID_DRAG,
                    "s": "t",
                    "args": {
                        "dx": e.dx,
                        "dt_ms": e.dt.as_millis_f64(timebase),
                    }
                }));
            }
            RecordedEvent::DragEnd(e) => {
                events.push(json!({
                    "ph": "E",
                    "name": "Drag",
                    "cat": "Input",
                    "ts": last,
                    "pid": 0,
                    "tid": TID_DRAG,
                }));
                if let Some(generation) = open_glide.take() {
                    events.push(glide_end(generation, last, "Interrupted"));
                }
                events.push(json!({
                    "ph": "b",
                    "name": "Glide",
                    "cat": "Momentum",
                    "id": e.generation,
                    "ts": last,
                    "pid": 0,
                    "tid": TID_GLIDE,
                    "args": { "velocity": e.velocity }
                }));
                open_glide = Some(e.generation);
            }
            RecordedEvent::DecayTick(e) => {
                events.push(json!({
                    "ph": "C",
                    "name": "Velocity",
                    "cat": "Momentum",
                    "ts": last,
                    "pid": 0,
                    "args": { "dx": e.dx }
                }));
                events.push(json!({
                    "ph": "n",
                    "name": "DecayTick",
                    "cat": "Momentum",
                    "id": e.generation,
                    "ts": last,
                    "pid": 0,
                    "tid": TID_GLIDE,
                    "args": { "tick": e.tick }
                }));
            }
            RecordedEvent::DecayStop(e) => {
                let reason = format!("{:?}", e.reason);
                if open_glide == Some(e.generation) {
                    open_glide = None;
                    events.push(glide_end(e.generation, last, &reason));
                } else {
                    events.push(json!({
                        "ph": "n",
                        "name": "InertTick",
                        "cat": "Momentum",
                        "id": e.generation,
                        "ts": last,
                        "pid": 0,
                        "tid": TID_GLIDE,
                        "args": { "reason": reason }
                    }));
                }
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn glide_end(generation: u64, ts: f64, reason: &str) -> Value {
    json!({
        "ph": "e",
        "name": "Glide",
        "cat": "Momentum",
        "id": generation,
        "ts": ts,
        "pid": 0,
        "tid": TID_GLIDE,
        "args": { "reason": reason }
    })
}

fn to_us(t: HostTime, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(t.ticks()) as f64 / 1000.0
}
