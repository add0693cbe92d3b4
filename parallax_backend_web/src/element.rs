// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element handles.
//!
//! A [`DomElement`] is the set of elements one selector matched, possibly
//! empty. Movement is applied as a `translate3d()` transform relative to the
//! offset each set had when it was resolved, so the page layout itself is
//! never rewritten. Animated moves use a CSS transition on `transform`;
//! starting another move retargets or clears it.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use parallax_core::element::{ElementResolver, SpriteElement};
use parallax_core::time::Duration;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

/// The elements matched by one selector.
pub struct DomElement {
    elements: Vec<HtmlElement>,
    origin: Point,
}

impl core::fmt::Debug for DomElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomElement")
            .field("elements_len", &self.elements.len())
            .field("origin", &self.origin)
            .finish()
    }
}

impl DomElement {
    /// Wraps a set of elements, recording the first one's current offset as
    /// the origin for later moves.
    #[must_use]
    pub fn new(elements: Vec<HtmlElement>) -> Self {
        let origin = elements.first().map_or(Point::ZERO, offset_of);
        Self { elements, origin }
    }

    /// A handle that refers to nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the wrapped elements.
    #[must_use]
    pub fn elements(&self) -> &[HtmlElement] {
        &self.elements
    }

    /// Returns `true` if the selector matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn apply(&self, position: Point, transition: &str) {
        let transform = translate_css(position - self.origin);
        for el in &self.elements {
            let s = el.style();
            let _ = s.set_property("transition", transition);
            let _ = s.set_property("transform", &transform);
        }
    }
}

impl SpriteElement for DomElement {
    fn position(&self) -> Point {
        self.elements.first().map_or(Point::ZERO, offset_of)
    }

    fn set_position(&mut self, position: Point) {
        self.apply(position, "none");
    }

    fn animate_to(&mut self, position: Point, duration: Duration) {
        let ms = duration.as_millis_f64(crate::timebase());
        self.apply(position, &transition_css(ms));
    }
}

/// Resolves selectors against a document.
#[derive(Clone, Debug)]
pub struct DomResolver {
    document: Option<Document>,
}

impl Default for DomResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomResolver {
    /// Resolves against the global window's document.
    ///
    /// Outside a browser window every selector resolves to nothing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }

    /// Resolves against `document`.
    #[must_use]
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Returns every HTML element matching `selector`, in document order.
    ///
    /// Invalid selectors match nothing.
    #[must_use]
    pub fn query(&self, selector: &str) -> Vec<HtmlElement> {
        let Some(document) = &self.document else {
            return Vec::new();
        };
        let Ok(list) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

impl ElementResolver for DomResolver {
    type Element = DomElement;

    fn resolve(&self, selector: &str) -> DomElement {
        DomElement::new(self.query(selector))
    }

    fn matches(&self, selector: &str) -> bool {
        !self.query(selector).is_empty()
    }
}

fn offset_of(el: &HtmlElement) -> Point {
    Point::new(f64::from(el.offset_left()), f64::from(el.offset_top()))
}

/// CSS `transform` value for a translation.
fn translate_css(offset: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", offset.x, offset.y)
}

/// CSS `transition` value for an animated move of `ms` milliseconds.
fn transition_css(ms: f64) -> String {
    format!("transform {ms}ms ease-in-out")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_uses_pixels() {
        assert_eq!(
            translate_css(Vec2::new(12.5, -3.0)),
            "translate3d(12.5px, -3px, 0)"
        );
    }

    #[test]
    fn transition_targets_transform() {
        assert_eq!(transition_css(1000.0), "transform 1000ms ease-in-out");
        assert_eq!(transition_css(30.0), "transform 30ms ease-in-out");
    }
}
