// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post-release deceleration.
//!
//! After a drag ends, the scene keeps moving with the last drag delta as its
//! velocity. Each tick a multiplier (starting at 1.0) is scaled by the damping
//! ratio and then applied to the velocity, so the velocity shrinks faster the
//! longer the glide runs. The glide settles as soon as the velocity magnitude
//! drops to the stop threshold or below.

use crate::time::{Duration, Timebase};

/// Tuning for the momentum simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumConfig {
    /// Ratio applied to the decay multiplier on every tick.
    pub damping: f64,
    /// Delay between ticks, in host ticks.
    pub tick_interval: Duration,
    /// Velocity magnitude (pixels per tick) at or below which the glide stops.
    pub stop_threshold: f64,
}

impl MomentumConfig {
    /// 0.95 damping, a 30 ms tick and a 0.5 px stop threshold, with the tick
    /// interval in [`Timebase::MICROS`] units.
    pub const DEFAULT: Self = Self::for_timebase(Timebase::MICROS);

    /// The default tuning with the tick interval expressed in `timebase`.
    #[must_use]
    pub const fn for_timebase(timebase: Timebase) -> Self {
        Self {
            damping: 0.95,
            tick_interval: Duration::from_millis(30, timebase),
            stop_threshold: 0.5,
        }
    }

    /// Replaces the damping ratio.
    #[must_use]
    pub const fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Replaces the tick interval.
    #[must_use]
    pub const fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Replaces the stop threshold.
    #[must_use]
    pub const fn with_stop_threshold(mut self, stop_threshold: f64) -> Self {
        self.stop_threshold = stop_threshold;
        self
    }
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of one [`Momentum::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MomentumStep {
    /// The scene should move by this horizontal delta.
    Moved(f64),
    /// The velocity fell below the threshold and was snapped to zero.
    Settled,
}

/// A single glide in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Momentum {
    velocity: f64,
    multiplier: f64,
    damping: f64,
    stop_threshold: f64,
    ticks: u32,
}

impl Momentum {
    /// Starts a glide at `velocity` pixels per tick.
    #[must_use]
    pub fn new(velocity: f64, config: &MomentumConfig) -> Self {
        Self {
            velocity,
            multiplier: 1.0,
            damping: config.damping,
            stop_threshold: config.stop_threshold,
            ticks: 0,
        }
    }

    /// Advances the glide by one tick.
    pub fn step(&mut self) -> MomentumStep {
        self.multiplier *= self.damping;
        self.velocity *= self.multiplier;
        // NaN fails the comparison and settles too.
        if self.velocity.abs() > self.stop_threshold {
            self.ticks += 1;
            MomentumStep::Moved(self.velocity)
        } else {
            self.velocity = 0.0;
            MomentumStep::Settled
        }
    }

    /// Current velocity in pixels per tick.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Number of ticks that produced movement so far.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn run(velocity: f64, config: &MomentumConfig) -> Vec<f64> {
        let mut glide = Momentum::new(velocity, config);
        let mut deltas = Vec::new();
        while let MomentumStep::Moved(dx) = glide.step() {
            deltas.push(dx);
        }
        deltas
    }

    #[test]
    fn default_tuning() {
        let c = MomentumConfig::default();
        assert_eq!(c.damping, 0.95);
        assert_eq!(c.tick_interval, Duration(30_000));
        assert_eq!(c.stop_threshold, 0.5);
        assert_eq!(
            MomentumConfig::for_timebase(Timebase::NANOS).tick_interval,
            Duration(30_000_000)
        );
    }

    #[test]
    fn multiplier_compounds_each_tick() {
        let mut glide = Momentum::new(30.0, &MomentumConfig::DEFAULT);
        assert_eq!(glide.step(), MomentumStep::Moved(30.0 * 0.95));
        let second = 30.0 * 0.95 * (0.95 * 0.95);
        match glide.step() {
            MomentumStep::Moved(dx) => assert!((dx - second).abs() < 1e-12),
            MomentumStep::Settled => panic!("glide settled too early"),
        }
        assert_eq!(glide.ticks(), 2);
    }

    #[test]
    fn magnitudes_strictly_decrease_until_threshold() {
        let deltas = run(30.0, &MomentumConfig::DEFAULT);
        assert!(!deltas.is_empty(), "a 30 px fling glides");
        assert!(deltas[0] < 30.0);
        for pair in deltas.windows(2) {
            assert!(pair[1].abs() < pair[0].abs(), "{pair:?} not decreasing");
        }
        assert!(deltas.iter().all(|dx| dx.abs() > 0.5));
    }

    #[test]
    fn negative_velocity_glides_left() {
        let deltas = run(-12.0, &MomentumConfig::DEFAULT);
        assert!(deltas.iter().all(|dx| *dx < 0.0));
    }

    #[test]
    fn small_velocity_settles_immediately() {
        let mut glide = Momentum::new(0.5, &MomentumConfig::DEFAULT);
        assert_eq!(glide.step(), MomentumStep::Settled);
        assert_eq!(glide.velocity(), 0.0);
        assert_eq!(glide.ticks(), 0);
    }

    #[test]
    fn nan_velocity_settles() {
        let mut glide = Momentum::new(f64::NAN, &MomentumConfig::DEFAULT);
        assert_eq!(glide.step(), MomentumStep::Settled);
    }

    #[test]
    fn custom_threshold_shortens_glide() {
        let long = run(30.0, &MomentumConfig::DEFAULT);
        let short = run(30.0, &MomentumConfig::DEFAULT.with_stop_threshold(10.0));
        assert!(short.len() < long.len());
    }
}
