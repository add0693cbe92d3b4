// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprite specifications and registered sprites.

use alloc::string::String;

use kurbo::{Point, Vec2};

use crate::element::SpriteElement;
use crate::time::Duration;

/// Describes a sprite to register: which element to move and how fast.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteSpec {
    /// Selector resolved by the host's [`ElementResolver`](crate::element::ElementResolver).
    pub selector: String,
    /// Multiplier applied to every scroll delta.
    pub speed: f64,
}

impl SpriteSpec {
    /// Creates a spec for `selector` moving at `speed`.
    #[must_use]
    pub fn new(selector: impl Into<String>, speed: f64) -> Self {
        Self {
            selector: selector.into(),
            speed,
        }
    }
}

/// A registered sprite: an element handle, the engine's record of where it
/// is, and its fixed speed.
#[derive(Debug)]
pub struct Sprite<E> {
    element: E,
    position: Point,
    speed: f64,
}

impl<E: SpriteElement> Sprite<E> {
    /// Registers `element`, reading its current position as the starting
    /// point.
    #[must_use]
    pub fn attach(element: E, speed: f64) -> Self {
        let position = element.position();
        Self {
            element,
            position,
            speed,
        }
    }

    /// Returns the engine's record of this sprite's position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the speed multiplier.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns the element handle.
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Adds `delta * speed` to the recorded position and pushes the result to
    /// the element.
    ///
    /// Zero-speed sprites are never touched.
    pub(crate) fn scroll(&mut self, delta: Vec2, duration: Duration) {
        if self.speed == 0.0 {
            return;
        }
        self.position += delta * self.speed;
        if duration.is_zero() {
            self.element.set_position(self.position);
        } else {
            self.element.animate_to(self.position, duration);
        }
    }
}
