// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprite store and drag/momentum physics for pointer-driven parallax.
//!
//! `parallax_core` owns the part of a parallax scene that does not depend on
//! any particular rendering host: a list of sprites that move at different
//! speeds, the drag state machine that turns pointer and touch input into
//! scroll deltas, and the momentum simulation that keeps the scene gliding
//! after release. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! Input flows from the host into the [`Engine`](engine::Engine) and out to
//! element handles:
//!
//! ```text
//!   Host events (pointer / touch)
//!       │
//!       ▼
//!   Engine::pointer_*() / touch_*() ──► DragTracker
//!       │                                   │ release
//!       ▼                                   ▼
//!   Engine::scroll_by() ◄── decay_tick() ◄─ DecayTicket ◄── host timer
//!       │
//!       ▼
//!   SpriteElement::set_position() / animate_to()
//! ```
//!
//! **[`engine`]**: The parallax engine: sprite registration, `scroll_by`,
//! and the input entry points that drive the drag state machine.
//!
//! **[`drag`]**: Drag tracking (`Idle → Dragging → Decaying → Idle`) and the
//! [`DecayTicket`](drag::DecayTicket) handle that identifies one decay loop.
//!
//! **[`momentum`]**: The post-release deceleration simulation and its
//! configuration.
//!
//! **[`element`]**: The [`SpriteElement`](element::SpriteElement) and
//! [`ElementResolver`](element::ElementResolver) traits that backends
//! implement.
//!
//! **[`sprite`]**: Sprite specifications and registered sprites.
//!
//! **[`config`]**: Engine construction options.
//!
//! **[`time`]**: Host time, durations and timebase conversion.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! engine instrumentation.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod drag;
pub mod element;
pub mod engine;
pub mod momentum;
pub mod sprite;
pub mod time;
pub mod trace;

pub use kurbo::{Point, Vec2};
