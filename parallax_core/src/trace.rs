// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for the engine.
//!
//! This module provides a [`TraceSink`] trait with one method per engine
//! event. All method bodies default to no-ops, so implementing only the events
//! you care about is fine.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing and installed sinks are
//! dropped. When **on**, each method performs a single `Option` branch before
//! dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;

use kurbo::{Point, Vec2};

use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted for each sprite registered with the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteAddedEvent {
    /// Position of the sprite in update order.
    pub index: usize,
    /// Speed multiplier.
    pub speed: f64,
    /// Position read from the element at registration.
    pub position: Point,
}

/// Emitted for every `scroll_by`, whether called by the host or by drag
/// handling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    /// Raw delta before speed scaling.
    pub delta: Vec2,
    /// Animation length; zero for immediate moves.
    pub duration: Duration,
    /// Number of sprites updated.
    pub sprite_count: usize,
}

/// Emitted when a pointer or single touch goes down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragBeginEvent {
    /// Page x coordinate.
    pub x: f64,
    /// Event time.
    pub at: HostTime,
}

/// Emitted for each followed drag move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragMoveEvent {
    /// Horizontal delta since the previous event.
    pub dx: f64,
    /// Time since the previous event.
    pub dt: Duration,
    /// Event time.
    pub at: HostTime,
}

/// Emitted when a drag is released and a glide starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEndEvent {
    /// Glide number.
    pub generation: u64,
    /// Initial glide velocity in pixels per tick.
    pub velocity: f64,
    /// Event time.
    pub at: HostTime,
}

/// Emitted for each glide tick that moved the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayTickEvent {
    /// Glide number.
    pub generation: u64,
    /// 1-based tick counter within the glide.
    pub tick: u32,
    /// Horizontal delta applied.
    pub dx: f64,
    /// Tick time.
    pub at: HostTime,
}

/// Why a glide ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecayStopReason {
    /// The velocity fell to the stop threshold.
    Settled,
    /// A new drag began, or the ticket was stale.
    Canceled,
}

/// Emitted when a glide tick does not move the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayStopEvent {
    /// Glide number of the ticket that fired.
    pub generation: u64,
    /// Why nothing moved.
    pub reason: DecayStopReason,
    /// Tick time.
    pub at: HostTime,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the engine.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a sprite is registered.
    fn on_sprite_added(&mut self, e: &SpriteAddedEvent) {
        _ = e;
    }

    /// Called after sprites were scrolled.
    fn on_scroll(&mut self, e: &ScrollEvent) {
        _ = e;
    }

    /// Called when a drag begins.
    fn on_drag_begin(&mut self, e: &DragBeginEvent) {
        _ = e;
    }

    /// Called for each followed drag move.
    fn on_drag_move(&mut self, e: &DragMoveEvent) {
        _ = e;
    }

    /// Called when a drag is released.
    fn on_drag_end(&mut self, e: &DragEndEvent) {
        _ = e;
    }

    /// Called for each glide tick that moved the scene.
    fn on_decay_tick(&mut self, e: &DecayTickEvent) {
        _ = e;
    }

    /// Called when a glide tick ends the glide or finds it canceled.
    fn on_decay_stop(&mut self, e: &DecayStopEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owner of an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer")
            .field("active", &self.is_active())
            .finish()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        let mut tracer = Self::none();
        tracer.set_sink(sink);
        tracer
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Installs `sink`, replacing any previous one.
    #[inline]
    pub fn set_sink(&mut self, sink: Box<dyn TraceSink>) {
        #[cfg(feature = "trace")]
        {
            self.sink = Some(sink);
        }
        #[cfg(not(feature = "trace"))]
        {
            drop(sink);
        }
    }

    /// Removes and returns the installed sink.
    #[inline]
    pub fn take_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        #[cfg(feature = "trace")]
        {
            self.sink.take()
        }
        #[cfg(not(feature = "trace"))]
        {
            None
        }
    }

    /// Returns `true` if events reach a sink.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Emits a [`SpriteAddedEvent`].
    #[inline]
    pub fn sprite_added(&mut self, e: &SpriteAddedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_sprite_added(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ScrollEvent`].
    #[inline]
    pub fn scroll(&mut self, e: &ScrollEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scroll(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DragBeginEvent`].
    #[inline]
    pub fn drag_begin(&mut self, e: &DragBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_drag_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DragMoveEvent`].
    #[inline]
    pub fn drag_move(&mut self, e: &DragMoveEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_drag_move(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DragEndEvent`].
    #[inline]
    pub fn drag_end(&mut self, e: &DragEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_drag_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DecayTickEvent`].
    #[inline]
    pub fn decay_tick(&mut self, e: &DecayTickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_decay_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DecayStopEvent`].
    #[inline]
    pub fn decay_stop(&mut self, e: &DecayStopEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_decay_stop(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
