// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking and decay-loop bookkeeping.
//!
//! [`DragTracker`] follows one pointer through
//! `Idle → Dragging → Decaying → Idle`:
//!
//! - [`begin`](DragTracker::begin) records where the drag started and raises
//!   the cancel flag, which tells any glide still running to stop.
//! - [`track`](DragTracker::track) turns a new pointer position into a
//!   horizontal delta.
//! - [`release`](DragTracker::release) lowers the cancel flag and starts a
//!   glide with the last delta as its velocity, handing back a
//!   [`DecayTicket`].
//! - [`step`](DragTracker::step) advances the glide named by a ticket.
//!
//! Cancellation is cooperative. A host timer that was already scheduled when
//! a new drag began still fires; its ticket is then stale (or the cancel flag
//! is up) and the step reports [`DecayStep::Canceled`] without side effects.

use crate::momentum::{Momentum, MomentumConfig, MomentumStep};
use crate::time::{Duration, HostTime, Timebase};

/// Where the tracker is in its drag lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No pointer down and no glide running.
    Idle,
    /// A pointer is down and moves are being followed.
    Dragging,
    /// The pointer was released and the scene is gliding.
    Decaying,
}

/// Identifies one glide.
///
/// Returned when a glide starts or continues; the host passes it back on the
/// next timer firing. Tickets from superseded glides are inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecayTicket {
    generation: u64,
}

impl DecayTicket {
    /// The glide number this ticket belongs to.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Outcome of [`DragTracker::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecayStep {
    /// The scene should move by this horizontal delta; schedule another tick.
    Moved(f64),
    /// The glide came to rest.
    Settled,
    /// The ticket no longer names the running glide. Nothing happened.
    Canceled,
}

/// Transient state of one drag interaction and its glide.
#[derive(Clone, Debug)]
pub struct DragTracker {
    last_x: f64,
    last_time: HostTime,
    dx: f64,
    dt: Duration,
    cancel_decay: bool,
    pointer_down: bool,
    generation: u64,
    glide: Option<Momentum>,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self {
            last_x: 0.0,
            last_time: HostTime::default(),
            dx: 0.0,
            dt: Duration::ZERO,
            cancel_decay: true,
            pointer_down: false,
            generation: 0,
            glide: None,
        }
    }
}

impl DragTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts following a pointer at page coordinate `x`.
    ///
    /// Any running glide is canceled. The last delta is kept: releasing
    /// without moving relaunches the glide at the velocity it had, and after
    /// a glide settled that velocity is zero.
    pub fn begin(&mut self, x: f64, now: HostTime) {
        self.interrupt();
        self.pointer_down = true;
        self.last_x = x;
        self.last_time = now;
    }

    /// Raises the cancel flag without starting a drag.
    pub fn interrupt(&mut self) {
        self.cancel_decay = true;
        self.glide = None;
    }

    /// Follows the pointer to `x`, returning the horizontal delta since the
    /// previous event, or `None` if no drag is in progress.
    pub fn track(&mut self, x: f64, now: HostTime) -> Option<f64> {
        if !self.pointer_down {
            return None;
        }
        self.dx = x - self.last_x;
        self.dt = now.saturating_duration_since(self.last_time);
        self.last_x += self.dx;
        self.last_time = self.last_time + self.dt;
        Some(self.dx)
    }

    /// Ends the drag and starts a glide with the last delta as velocity.
    ///
    /// Returns `None` if no drag was in progress.
    pub fn release(&mut self, config: &MomentumConfig) -> Option<DecayTicket> {
        if !self.pointer_down {
            return None;
        }
        self.pointer_down = false;
        self.cancel_decay = false;
        self.generation += 1;
        self.glide = Some(Momentum::new(self.dx, config));
        Some(DecayTicket {
            generation: self.generation,
        })
    }

    /// Advances the glide named by `ticket` by one tick.
    pub fn step(&mut self, ticket: DecayTicket) -> DecayStep {
        if self.cancel_decay || ticket.generation != self.generation {
            return DecayStep::Canceled;
        }
        let Some(glide) = &mut self.glide else {
            return DecayStep::Canceled;
        };
        match glide.step() {
            MomentumStep::Moved(dx) => {
                self.dx = dx;
                DecayStep::Moved(dx)
            }
            MomentumStep::Settled => {
                self.dx = 0.0;
                self.glide = None;
                DecayStep::Settled
            }
        }
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.pointer_down {
            DragPhase::Dragging
        } else if self.glide.is_some() && !self.cancel_decay {
            DragPhase::Decaying
        } else {
            DragPhase::Idle
        }
    }

    /// The most recent horizontal delta: the last drag move while dragging,
    /// the current glide velocity while decaying.
    #[must_use]
    pub fn last_dx(&self) -> f64 {
        self.dx
    }

    /// Time between the last two drag events.
    #[must_use]
    pub fn last_interval(&self) -> Duration {
        self.dt
    }

    /// Page coordinate of the last followed pointer event.
    #[must_use]
    pub fn last_x(&self) -> f64 {
        self.last_x
    }

    /// Drag speed in pixels per millisecond, from the last two drag events.
    ///
    /// Zero when the events shared a timestamp.
    #[must_use]
    pub fn velocity(&self, timebase: Timebase) -> f64 {
        let ms = self.dt.as_millis_f64(timebase);
        if ms > 0.0 { self.dx / ms } else { 0.0 }
    }

    /// Number of ticks the running glide has moved the scene.
    #[must_use]
    pub fn glide_ticks(&self) -> u32 {
        self.glide.as_ref().map_or(0, Momentum::ticks)
    }

    /// Returns `true` if a pointer is down.
    #[must_use]
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Returns `true` if glides are currently told to stop.
    #[must_use]
    pub fn is_decay_canceled(&self) -> bool {
        self.cancel_decay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CFG: MomentumConfig = MomentumConfig::DEFAULT;

    #[test]
    fn starts_idle_with_decay_canceled() {
        let t = DragTracker::new();
        assert_eq!(t.phase(), DragPhase::Idle);
        assert!(t.is_decay_canceled());
        assert!(!t.is_pointer_down());
    }

    #[test]
    fn track_reports_delta_and_interval() {
        let mut t = DragTracker::new();
        t.begin(100.0, HostTime(1_000));
        assert_eq!(t.phase(), DragPhase::Dragging);
        assert_eq!(t.track(130.0, HostTime(17_000)), Some(30.0));
        assert_eq!(t.last_interval(), Duration(16_000));
        assert_eq!(t.last_x(), 130.0);
        assert_eq!(t.track(125.0, HostTime(33_000)), Some(-5.0));
    }

    #[test]
    fn velocity_in_pixels_per_millisecond() {
        let mut t = DragTracker::new();
        t.begin(0.0, HostTime(0));
        t.track(20.0, HostTime(10_000));
        assert!((t.velocity(Timebase::MICROS) - 2.0).abs() < 1e-12);
        t.track(25.0, HostTime(10_000));
        assert_eq!(t.velocity(Timebase::MICROS), 0.0, "same timestamp");
    }

    #[test]
    fn track_without_begin_is_ignored() {
        let mut t = DragTracker::new();
        assert_eq!(t.track(50.0, HostTime(0)), None);
        assert_eq!(t.release(&CFG), None);
    }

    #[test]
    fn release_starts_glide() {
        let mut t = DragTracker::new();
        t.begin(100.0, HostTime(0));
        t.track(130.0, HostTime(16_000));
        let ticket = t.release(&CFG).expect("drag was in progress");
        assert_eq!(t.phase(), DragPhase::Decaying);
        assert!(!t.is_decay_canceled());
        assert_eq!(t.step(ticket), DecayStep::Moved(30.0 * 0.95));
        assert_eq!(t.glide_ticks(), 1);
    }

    #[test]
    fn glide_settles_and_snaps_to_zero() {
        let mut t = DragTracker::new();
        t.begin(0.0, HostTime(0));
        t.track(2.0, HostTime(1));
        let ticket = t.release(&CFG).expect("drag was in progress");
        let mut steps = 0;
        while let DecayStep::Moved(_) = t.step(ticket) {
            steps += 1;
        }
        assert!(steps > 0);
        assert_eq!(t.last_dx(), 0.0);
        assert_eq!(t.phase(), DragPhase::Idle);
        assert_eq!(t.step(ticket), DecayStep::Canceled, "glide is over");
    }

    #[test]
    fn tap_relaunches_glide_at_current_velocity() {
        let mut t = DragTracker::new();
        t.begin(0.0, HostTime(0));
        t.track(40.0, HostTime(1));
        let first = t.release(&CFG).expect("drag was in progress");
        assert_eq!(t.step(first), DecayStep::Moved(40.0 * 0.95));

        t.begin(40.0, HostTime(2));
        assert_eq!(t.last_dx(), 40.0 * 0.95, "tap keeps the glide velocity");
        let second = t.release(&CFG).expect("drag was in progress");
        assert_eq!(t.step(first), DecayStep::Canceled);
        assert_eq!(
            t.step(second),
            DecayStep::Moved(40.0 * 0.95 * 0.95),
            "multiplier starts over"
        );
    }

    #[test]
    fn tap_after_settled_glide_does_not_move() {
        let mut t = DragTracker::new();
        t.begin(0.0, HostTime(0));
        t.track(2.0, HostTime(1));
        let ticket = t.release(&CFG).expect("drag was in progress");
        while let DecayStep::Moved(_) = t.step(ticket) {}

        t.begin(10.0, HostTime(2));
        let tap = t.release(&CFG).expect("drag was in progress");
        assert_eq!(t.step(tap), DecayStep::Settled);
    }

    #[test]
    fn new_drag_cancels_running_glide() {
        let mut t = DragTracker::new();
        t.begin(0.0, HostTime(0));
        t.track(30.0, HostTime(1));
        let ticket = t.release(&CFG).expect("drag was in progress");
        assert!(matches!(t.step(ticket), DecayStep::Moved(_)));

        t.begin(10.0, HostTime(2));
        assert_eq!(t.step(ticket), DecayStep::Canceled);
        assert_eq!(t.phase(), DragPhase::Dragging);
    }

    #[test]
    fn stale_ticket_is_inert_after_quick_redrag() {
        let mut t = DragTracker::new();
        t.begin(0.0, HostTime(0));
        t.track(30.0, HostTime(1));
        let old = t.release(&CFG).expect("drag was in progress");

        // A second drag starts and ends before the old timer fires.
        t.begin(30.0, HostTime(2));
        t.track(50.0, HostTime(3));
        let new = t.release(&CFG).expect("drag was in progress");

        assert_ne!(old, new);
        assert_eq!(t.step(old), DecayStep::Canceled);
        assert!(matches!(t.step(new), DecayStep::Moved(_)));
    }

    #[test]
    fn interrupt_stops_glide_without_starting_drag() {
        let mut t = DragTracker::new();
        t.begin(0.0, HostTime(0));
        t.track(30.0, HostTime(1));
        let ticket = t.release(&CFG).expect("drag was in progress");
        t.interrupt();
        assert_eq!(t.phase(), DragPhase::Idle);
        assert_eq!(t.step(ticket), DecayStep::Canceled);
        assert_eq!(t.track(40.0, HostTime(2)), None);
    }
}
