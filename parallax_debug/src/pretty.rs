// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] writes one line per event to a [`Write`] destination
//! (default: stderr).

use std::io::{self, Write};

use parallax_core::time::{Duration, HostTime, Timebase};
use parallax_core::trace::{
    DecayStopEvent, DecayTickEvent, DragBeginEvent, DragEndEvent, DragMoveEvent, ScrollEvent,
    SpriteAddedEvent, TraceSink,
};

/// A [`TraceSink`] that writes one line per event.
///
/// Timestamps are printed in milliseconds using the given [`Timebase`].
/// Write errors are ignored.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> core::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(io::stderr()),
            timebase,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to `writer`.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ms(&self, t: HostTime) -> f64 {
        Duration(t.ticks()).as_millis_f64(self.timebase)
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_sprite_added(&mut self, e: &SpriteAddedEvent) {
        let _ = writeln!(
            self.writer,
            "[sprite] #{} speed={} at=({}, {})",
            e.index, e.speed, e.position.x, e.position.y
        );
    }

    fn on_scroll(&mut self, e: &ScrollEvent) {
        let _ = writeln!(
            self.writer,
            "[scroll] dx={:.2} dy={:.2} animate={:.1}ms sprites={}",
            e.delta.x,
            e.delta.y,
            e.duration.as_millis_f64(self.timebase),
            e.sprite_count
        );
    }

    fn on_drag_begin(&mut self, e: &DragBeginEvent) {
        let at = self.ms(e.at);
        let _ = writeln!(self.writer, "[drag:begin] t={at:.3}ms x={}", e.x);
    }

    fn on_drag_move(&mut self, e: &DragMoveEvent) {
        let at = self.ms(e.at);
        let _ = writeln!(
            self.writer,
            "[drag:move] t={at:.3}ms dx={} dt={:.3}ms",
            e.dx,
            e.dt.as_millis_f64(self.timebase)
        );
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        let at = self.ms(e.at);
        let _ = writeln!(
            self.writer,
            "[drag:end] t={at:.3}ms glide={} velocity={}",
            e.generation, e.velocity
        );
    }

    fn on_decay_tick(&mut self, e: &DecayTickEvent) {
        let at = self.ms(e.at);
        let _ = writeln!(
            self.writer,
            "[decay] t={at:.3}ms glide={} tick={} dx={:.4}",
            e.generation, e.tick, e.dx
        );
    }

    fn on_decay_stop(&mut self, e: &DecayStopEvent) {
        let at = self.ms(e.at);
        let _ = writeln!(
            self.writer,
            "[decay:stop] t={at:.3}ms glide={} reason={:?}",
            e.generation, e.reason
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubPage;
    use parallax_core::config::EngineConfig;
    use parallax_core::engine::Engine;
    use parallax_core::trace::DecayStopReason;

    fn render(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> String {
        let mut sink = PrettyPrintSink::with_writer(Vec::new(), Timebase::MICROS);
        f(&mut sink);
        String::from_utf8(sink.into_writer()).unwrap()
    }

    #[test]
    fn drag_lines() {
        let out = render(|sink| {
            sink.on_drag_begin(&DragBeginEvent {
                x: 120.0,
                at: HostTime(1_500),
            });
            sink.on_drag_move(&DragMoveEvent {
                dx: -8.0,
                dt: Duration(16_000),
                at: HostTime(17_500),
            });
        });
        assert_eq!(
            out,
            "[drag:begin] t=1.500ms x=120\n[drag:move] t=17.500ms dx=-8 dt=16.000ms\n"
        );
    }

    #[test]
    fn stop_line_names_reason() {
        let out = render(|sink| {
            sink.on_decay_stop(&DecayStopEvent {
                generation: 2,
                reason: DecayStopReason::Settled,
                at: HostTime(90_000),
            });
        });
        assert_eq!(out, "[decay:stop] t=90.000ms glide=2 reason=Settled\n");
    }

    #[test]
    fn full_glide_ends_settled() {
        let mut engine = Engine::new(&StubPage, &EngineConfig::new().with_sprite("#a", 1.0));
        let buf = SharedBuf::default();
        engine.set_trace_sink(Box::new(PrettyPrintSink::with_writer(
            buf.clone(),
            Timebase::MICROS,
        )));

        engine.pointer_down(0.0, HostTime(0));
        engine.pointer_move(10.0, HostTime(16_000));
        let mut ticket = engine.pointer_up(HostTime(20_000));
        let mut now = HostTime(20_000);
        while let Some(t) = ticket {
            now = now + engine.momentum().tick_interval;
            ticket = engine.decay_tick(t, now);
        }

        let out = buf.contents();
        assert!(out.starts_with("[drag:begin]"), "{out}");
        assert!(out.contains("[decay] t=20.000ms glide=1 tick=1 dx=9.5000"));
        assert!(out.trim_end().ends_with("reason=Settled"), "{out}");
    }

    #[derive(Clone, Default)]
    struct SharedBuf(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
