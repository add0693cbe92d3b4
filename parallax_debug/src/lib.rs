// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for parallax
//! diagnostics.
//!
//! This crate provides [`TraceSink`](parallax_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory recording, read back through a
//!   [`recorder::Recording`] handle after the sink is boxed into an engine.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from recorded
//!   events.

pub mod chrome;
pub mod pretty;
pub mod recorder;

#[cfg(test)]
pub(crate) mod testing {
    //! A minimal in-memory page for driving a real engine.

    use parallax_core::element::{ElementResolver, SpriteElement};
    use parallax_core::time::Duration;
    use parallax_core::Point;

    #[derive(Debug, Default)]
    pub(crate) struct StubElement {
        position: Point,
    }

    impl SpriteElement for StubElement {
        fn position(&self) -> Point {
            self.position
        }

        fn set_position(&mut self, position: Point) {
            self.position = position;
        }

        fn animate_to(&mut self, position: Point, _duration: Duration) {
            self.position = position;
        }
    }

    /// Every selector matches one element at the origin.
    #[derive(Debug, Default)]
    pub(crate) struct StubPage;

    impl ElementResolver for StubPage {
        type Element = StubElement;

        fn resolve(&self, _selector: &str) -> StubElement {
            StubElement::default()
        }

        fn matches(&self, _selector: &str) -> bool {
            true
        }
    }
}
