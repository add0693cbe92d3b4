// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element contract for rendering hosts.
//!
//! The engine never owns renderable elements. Backends hand it handles that
//! implement [`SpriteElement`], produced by an [`ElementResolver`] from a
//! selector string. Both traits are implemented by the DOM backend and by the
//! test doubles in this crate.
//!
//! A handle may refer to zero elements. Lookups that match nothing must still
//! produce a handle; every operation on it is then a no-op and
//! [`position`](SpriteElement::position) reports the origin.

use kurbo::Point;

use crate::time::Duration;

/// A handle to a renderable element that a sprite moves.
pub trait SpriteElement {
    /// Returns the element's current on-screen offset.
    ///
    /// Read once when the sprite is registered; afterwards the engine's own
    /// record is authoritative.
    fn position(&self) -> Point;

    /// Moves the element to `position` immediately, with no animation.
    ///
    /// Called on every drag move and momentum tick.
    fn set_position(&mut self, position: Point);

    /// Animates the element to `position` over `duration`.
    ///
    /// A newer call supersedes any animation still in flight.
    fn animate_to(&mut self, position: Point, duration: Duration);
}

/// Resolves selector strings into element handles.
pub trait ElementResolver {
    /// The handle type produced by this resolver.
    type Element: SpriteElement;

    /// Resolves `selector` to a handle, which may refer to nothing.
    fn resolve(&self, selector: &str) -> Self::Element;

    /// Returns `true` if `selector` matches at least one element.
    fn matches(&self, selector: &str) -> bool;
}
