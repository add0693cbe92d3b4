// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The parallax engine.
//!
//! [`Engine`] owns the registered sprites and the drag state. Hosts call
//! [`scroll_by`](Engine::scroll_by) directly, and forward pointer and touch
//! input to the `pointer_*` and `touch_*` entry points. Releasing a drag
//! returns a [`DecayTicket`]; the host schedules
//! [`decay_tick`](Engine::decay_tick) after
//! [`MomentumConfig::tick_interval`] and keeps rescheduling for as long as a
//! ticket comes back.
//!
//! # Host loop pseudocode
//!
//! ```rust,ignore
//! fn on_pointer_up(engine: &mut Engine<E>) {
//!     if let Some(ticket) = engine.pointer_up(now()) {
//!         set_timeout(interval, move || on_decay_timer(ticket));
//!     }
//! }
//!
//! fn on_decay_timer(engine: &mut Engine<E>, ticket: DecayTicket) {
//!     if let Some(next) = engine.decay_tick(ticket, now()) {
//!         set_timeout(interval, move || on_decay_timer(next));
//!     }
//! }
//! ```
//!
//! None of the entry points can fail. Selectors that match nothing, a missing
//! touch target and empty sprite lists all leave the engine working, with
//! nothing visible happening.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;

use crate::config::EngineConfig;
use crate::drag::{DecayStep, DecayTicket, DragPhase, DragTracker};
use crate::element::{ElementResolver, SpriteElement};
use crate::momentum::MomentumConfig;
use crate::sprite::{Sprite, SpriteSpec};
use crate::time::{Duration, HostTime};
use crate::trace::{
    DecayStopEvent, DecayStopReason, DecayTickEvent, DragBeginEvent, DragEndEvent, DragMoveEvent,
    ScrollEvent, SpriteAddedEvent, TraceSink, Tracer,
};

/// Moves a set of sprites at individual speeds in response to scroll deltas
/// and drag input.
#[derive(Debug)]
pub struct Engine<E> {
    sprites: Vec<Sprite<E>>,
    drag: DragTracker,
    momentum: MomentumConfig,
    touch_target: Option<String>,
    tracer: Tracer,
}

impl<E: SpriteElement> Engine<E> {
    /// Builds an engine from `config`, resolving every sprite selector
    /// through `resolver`.
    ///
    /// The touch target is kept only if it matches at least one element;
    /// otherwise the engine is static and moves only through
    /// [`scroll_by`](Self::scroll_by).
    pub fn new<R>(resolver: &R, config: &EngineConfig) -> Self
    where
        R: ElementResolver<Element = E>,
    {
        Self::with_tracer(resolver, config, Tracer::none())
    }

    /// Like [`new`](Self::new), with a tracer installed before the sprites are
    /// registered.
    pub fn with_tracer<R>(resolver: &R, config: &EngineConfig, tracer: Tracer) -> Self
    where
        R: ElementResolver<Element = E>,
    {
        let mut engine = Self {
            sprites: Vec::with_capacity(config.sprites.len()),
            drag: DragTracker::new(),
            momentum: config.momentum,
            touch_target: None,
            tracer,
        };
        engine.init_with_config(resolver, config);
        engine
    }

    /// Applies `config` to an existing engine: appends its sprites, adopts
    /// its momentum tuning and, if its touch target matches, records it.
    ///
    /// Returns the touch target selector if one was adopted by this call.
    pub fn init_with_config<R>(&mut self, resolver: &R, config: &EngineConfig) -> Option<&str>
    where
        R: ElementResolver<Element = E>,
    {
        self.momentum = config.momentum;
        self.add_sprites(resolver, &config.sprites);
        let target = config
            .touch_target
            .as_ref()
            .filter(|selector| resolver.matches(selector))?;
        self.touch_target = Some(target.clone());
        self.touch_target.as_deref()
    }

    /// Resolves and appends sprites, each starting at its element's current
    /// position.
    ///
    /// Duplicate selectors are registered again; selectors that match nothing
    /// produce sprites whose element updates are no-ops.
    pub fn add_sprites<R>(&mut self, resolver: &R, specs: &[SpriteSpec])
    where
        R: ElementResolver<Element = E>,
    {
        self.sprites.reserve(specs.len());
        for spec in specs {
            let sprite = Sprite::attach(resolver.resolve(&spec.selector), spec.speed);
            self.tracer.sprite_added(&SpriteAddedEvent {
                index: self.sprites.len(),
                speed: sprite.speed(),
                position: sprite.position(),
            });
            self.sprites.push(sprite);
        }
    }

    /// Moves every sprite by `(dx, dy)` scaled by its speed.
    ///
    /// A non-zero `duration` animates the elements there; a zero duration
    /// moves them immediately.
    pub fn scroll_by(&mut self, dx: f64, dy: f64, duration: Duration) {
        let delta = Vec2::new(dx, dy);
        for sprite in &mut self.sprites {
            sprite.scroll(delta, duration);
        }
        self.tracer.scroll(&ScrollEvent {
            delta,
            duration,
            sprite_count: self.sprites.len(),
        });
    }

    // -- mouse / pointer ---------------------------------------------------

    /// A pointer went down at page coordinate `x`.
    pub fn pointer_down(&mut self, x: f64, now: HostTime) {
        self.drag.begin(x, now);
        self.tracer.drag_begin(&DragBeginEvent { x, at: now });
    }

    /// The pointer moved to page coordinate `x`. Ignored unless a drag is in
    /// progress.
    ///
    /// Returns `true` if the move was followed.
    pub fn pointer_move(&mut self, x: f64, now: HostTime) -> bool {
        let Some(dx) = self.drag.track(x, now) else {
            return false;
        };
        self.tracer.drag_move(&DragMoveEvent {
            dx,
            dt: self.drag.last_interval(),
            at: now,
        });
        self.scroll_by(dx, 0.0, Duration::ZERO);
        true
    }

    /// The pointer was released.
    ///
    /// Runs the first glide tick right away. Returns the ticket for the next
    /// tick, to be passed to [`decay_tick`](Self::decay_tick) after
    /// [`MomentumConfig::tick_interval`], or `None` if nothing glides.
    pub fn pointer_up(&mut self, now: HostTime) -> Option<DecayTicket> {
        let velocity = self.drag.last_dx();
        let ticket = self.drag.release(&self.momentum)?;
        self.tracer.drag_end(&DragEndEvent {
            generation: ticket.generation(),
            velocity,
            at: now,
        });
        self.decay_tick(ticket, now)
    }

    // -- touch -------------------------------------------------------------

    /// Touches started; `touches` holds the page x of every active touch.
    ///
    /// Any glide stops. Only a single touch starts a drag.
    pub fn touch_start(&mut self, touches: &[f64], now: HostTime) {
        match touches {
            [x] => self.pointer_down(*x, now),
            _ => self.drag.interrupt(),
        }
    }

    /// Touches moved. Multi-touch moves are ignored.
    ///
    /// Returns `true` if the move was followed.
    pub fn touch_move(&mut self, touches: &[f64], now: HostTime) -> bool {
        match touches {
            [x] => self.pointer_move(*x, now),
            _ => false,
        }
    }

    /// Touches ended. Behaves like [`pointer_up`](Self::pointer_up).
    pub fn touch_end(&mut self, now: HostTime) -> Option<DecayTicket> {
        self.pointer_up(now)
    }

    // -- momentum ----------------------------------------------------------

    /// Runs one glide tick for `ticket`.
    ///
    /// Returns the ticket for the next tick while the glide keeps moving.
    /// Stale or canceled tickets do nothing and return `None`.
    pub fn decay_tick(&mut self, ticket: DecayTicket, now: HostTime) -> Option<DecayTicket> {
        let generation = ticket.generation();
        match self.drag.step(ticket) {
            DecayStep::Moved(dx) => {
                self.tracer.decay_tick(&DecayTickEvent {
                    generation,
                    tick: self.drag.glide_ticks(),
                    dx,
                    at: now,
                });
                self.scroll_by(dx, 0.0, Duration::ZERO);
                Some(ticket)
            }
            DecayStep::Settled => {
                self.stop_event(generation, DecayStopReason::Settled, now);
                None
            }
            DecayStep::Canceled => {
                self.stop_event(generation, DecayStopReason::Canceled, now);
                None
            }
        }
    }

    fn stop_event(&mut self, generation: u64, reason: DecayStopReason, at: HostTime) {
        self.tracer.decay_stop(&DecayStopEvent {
            generation,
            reason,
            at,
        });
    }

    // -- accessors ---------------------------------------------------------

    /// Registered sprites in update order.
    #[must_use]
    pub fn sprites(&self) -> &[Sprite<E>] {
        &self.sprites
    }

    /// The drag tracker.
    #[must_use]
    pub fn drag(&self) -> &DragTracker {
        &self.drag
    }

    /// Current drag lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// Momentum tuning in effect.
    #[must_use]
    pub fn momentum(&self) -> &MomentumConfig {
        &self.momentum
    }

    /// The touch target selector, if it matched an element.
    #[must_use]
    pub fn touch_target(&self) -> Option<&str> {
        self.touch_target.as_deref()
    }

    /// Returns `true` if drag input should be wired to the touch target.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.touch_target.is_some()
    }

    /// Installs a trace sink, replacing any previous one.
    ///
    /// Has no effect unless the `trace` feature is enabled.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.tracer.set_sink(sink);
    }

    /// Removes and returns the installed trace sink.
    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.tracer.take_sink()
    }
}
