// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to a
//! shared buffer as a [`RecordedEvent`]. Engines take their sink boxed, so
//! the buffer is read through a [`Recording`] handle obtained before the sink
//! is handed over.

use std::cell::RefCell;
use std::rc::Rc;

use parallax_core::time::HostTime;
use parallax_core::trace::{
    DecayStopEvent, DecayTickEvent, DragBeginEvent, DragEndEvent, DragMoveEvent, ScrollEvent,
    SpriteAddedEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// RecordedEvent
// ---------------------------------------------------------------------------

/// One recorded engine event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`SpriteAddedEvent`].
    SpriteAdded(SpriteAddedEvent),
    /// A [`ScrollEvent`].
    Scroll(ScrollEvent),
    /// A [`DragBeginEvent`].
    DragBegin(DragBeginEvent),
    /// A [`DragMoveEvent`].
    DragMove(DragMoveEvent),
    /// A [`DragEndEvent`].
    DragEnd(DragEndEvent),
    /// A [`DecayTickEvent`].
    DecayTick(DecayTickEvent),
    /// A [`DecayStopEvent`].
    DecayStop(DecayStopEvent),
}

impl RecordedEvent {
    /// Returns the event's timestamp, if it carries one.
    ///
    /// Sprite registration and scrolls are not timestamped.
    #[must_use]
    pub fn at(&self) -> Option<HostTime> {
        match self {
            Self::SpriteAdded(_) | Self::Scroll(_) => None,
            Self::DragBegin(e) => Some(e.at),
            Self::DragMove(e) => Some(e.at),
            Self::DragEnd(e) => Some(e.at),
            Self::DecayTick(e) => Some(e.at),
            Self::DecayStop(e) => Some(e.at),
        }
    }
}

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that records every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle that reads this recorder's events.
    #[must_use]
    pub fn recording(&self) -> Recording {
        Recording {
            events: Rc::clone(&self.events),
        }
    }

    fn push(&self, event: RecordedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl TraceSink for RecorderSink {
    fn on_sprite_added(&mut self, e: &SpriteAddedEvent) {
        self.push(RecordedEvent::SpriteAdded(*e));
    }

    fn on_scroll(&mut self, e: &ScrollEvent) {
        self.push(RecordedEvent::Scroll(*e));
    }

    fn on_drag_begin(&mut self, e: &DragBeginEvent) {
        self.push(RecordedEvent::DragBegin(*e));
    }

    fn on_drag_move(&mut self, e: &DragMoveEvent) {
        self.push(RecordedEvent::DragMove(*e));
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        self.push(RecordedEvent::DragEnd(*e));
    }

    fn on_decay_tick(&mut self, e: &DecayTickEvent) {
        self.push(RecordedEvent::DecayTick(*e));
    }

    fn on_decay_stop(&mut self, e: &DecayStopEvent) {
        self.push(RecordedEvent::DecayStop(*e));
    }
}

// ---------------------------------------------------------------------------
// Recording
// ---------------------------------------------------------------------------

/// Read access to a [`RecorderSink`]'s events.
///
/// Stays valid after the sink itself is dropped.
#[derive(Clone, Debug)]
pub struct Recording {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl Recording {
    /// Returns a copy of the events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Number of events recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Removes and returns the recorded events.
    pub fn drain(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
