// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser-driven parallax engine.
//!
//! [`ParallaxEngine`] wraps a core [`Engine`] over [`DomElement`]s. When the
//! configured touch target matches, it registers mouse and touch listeners on
//! every matched element and runs the momentum loop with `setTimeout`, one
//! one-shot timer per tick.
//!
//! Listener closures and timers hold only a weak reference to the engine
//! state, so dropping the handle detaches the listeners and turns any pending
//! timer into a no-op.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use parallax_core::config::EngineConfig;
use parallax_core::drag::DecayTicket;
use parallax_core::engine::Engine;
use parallax_core::sprite::SpriteSpec;
use parallax_core::time::Duration;
use parallax_core::trace::TraceSink;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};

use crate::element::{DomElement, DomResolver};

type ListenerClosure = Closure<dyn FnMut(Event)>;

/// A parallax engine bound to the page.
///
/// Create with [`ParallaxEngine::new`] and keep the handle alive for as long
/// as the effect should run.
pub struct ParallaxEngine {
    inner: Rc<EngineInner>,
}

struct EngineInner {
    engine: RefCell<Engine<DomElement>>,
    resolver: DomResolver,
    /// Registered listeners, kept so they can be removed on drop.
    listeners: RefCell<Vec<Listener>>,
}

struct Listener {
    target: HtmlElement,
    kind: &'static str,
    closure: ListenerClosure,
}

impl ParallaxEngine {
    /// Builds an engine from `config` against the global document.
    ///
    /// Selectors that match nothing are tolerated. Errors come only from the
    /// browser refusing a listener registration.
    pub fn new(config: &EngineConfig) -> Result<Self, JsValue> {
        Self::with_resolver(DomResolver::new(), config)
    }

    /// Builds an engine from `config`, resolving selectors with `resolver`.
    pub fn with_resolver(resolver: DomResolver, config: &EngineConfig) -> Result<Self, JsValue> {
        let this = Self {
            inner: Rc::new(EngineInner {
                engine: RefCell::new(Engine::new(&resolver, &EngineConfig::default())),
                resolver,
                listeners: RefCell::new(Vec::new()),
            }),
        };
        this.init_with_config(config)?;
        Ok(this)
    }

    /// Applies another configuration: appends its sprites and, if its touch
    /// target matches, wires drag listeners to it.
    ///
    /// Elements that already carry listeners are left alone, so repeating a
    /// touch target does not double every drag event.
    pub fn init_with_config(&self, config: &EngineConfig) -> Result<(), JsValue> {
        let target = {
            let mut engine = self.inner.engine.borrow_mut();
            engine
                .init_with_config(&self.inner.resolver, config)
                .map(String::from)
        };
        let Some(selector) = target else {
            return Ok(());
        };
        let fresh = {
            let bound: Vec<HtmlElement> = self
                .inner
                .listeners
                .borrow()
                .iter()
                .map(|l| l.target.clone())
                .collect();
            unbound(self.inner.resolver.query(&selector), &bound)
        };
        for element in &fresh {
            self.attach(element)?;
        }
        Ok(())
    }

    /// Appends sprites at runtime.
    pub fn add_sprites(&self, specs: &[SpriteSpec]) {
        self.inner
            .engine
            .borrow_mut()
            .add_sprites(&self.inner.resolver, specs);
    }

    /// Moves every sprite by `(dx, dy)` scaled by its speed, animating over
    /// `duration` if it is non-zero.
    pub fn scroll_by(&self, dx: f64, dy: f64, duration: Duration) {
        self.inner.engine.borrow_mut().scroll_by(dx, dy, duration);
    }

    /// Installs a trace sink on the engine.
    pub fn set_trace_sink(&self, sink: Box<dyn TraceSink>) {
        self.inner.engine.borrow_mut().set_trace_sink(sink);
    }

    /// Runs `f` with read access to the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&Engine<DomElement>) -> R) -> R {
        f(&self.inner.engine.borrow())
    }

    /// Returns `true` if drag listeners are attached.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.inner.listeners.borrow().is_empty()
    }

    fn attach(&self, target: &HtmlElement) -> Result<(), JsValue> {
        self.listen(target, "mousedown", |engine, event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            engine.pointer_down(f64::from(mouse.page_x()), crate::now());
            event.prevent_default();
        })?;
        self.listen(target, "mousemove", |engine, event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if engine.pointer_move(f64::from(mouse.page_x()), crate::now()) {
                event.prevent_default();
            }
        })?;
        self.listen_release(target, "mouseup", |engine, event| {
            event.prevent_default();
            engine.pointer_up(crate::now())
        })?;
        self.listen(target, "touchstart", |engine, event| {
            if let Some(touch) = event.dyn_ref::<TouchEvent>() {
                engine.touch_start(&touch_xs(touch), crate::now());
            }
        })?;
        self.listen(target, "touchmove", |engine, event| {
            if let Some(touch) = event.dyn_ref::<TouchEvent>() {
                engine.touch_move(&touch_xs(touch), crate::now());
            }
            event.prevent_default();
        })?;
        self.listen_release(target, "touchend", |engine, _event| {
            engine.touch_end(crate::now())
        })?;
        Ok(())
    }

    /// Registers a handler that only updates drag state.
    fn listen(
        &self,
        target: &HtmlElement,
        kind: &'static str,
        mut handler: impl FnMut(&mut Engine<DomElement>, &Event) + 'static,
    ) -> Result<(), JsValue> {
        self.register(target, kind, move |inner, event| {
            if let Ok(mut engine) = inner.engine.try_borrow_mut() {
                handler(&mut engine, event);
            }
        })
    }

    /// Registers a handler that may start a glide.
    fn listen_release(
        &self,
        target: &HtmlElement,
        kind: &'static str,
        mut handler: impl FnMut(&mut Engine<DomElement>, &Event) -> Option<DecayTicket> + 'static,
    ) -> Result<(), JsValue> {
        self.register(target, kind, move |inner, event| {
            let next = match inner.engine.try_borrow_mut() {
                Ok(mut engine) => handler(&mut engine, event)
                    .map(|ticket| (ticket, engine.momentum().tick_interval)),
                Err(_) => None,
            };
            if let Some((ticket, interval)) = next {
                schedule_decay(inner, ticket, interval);
            }
        })
    }

    fn register(
        &self,
        target: &HtmlElement,
        kind: &'static str,
        mut handler: impl FnMut(&Rc<EngineInner>, &Event) + 'static,
    ) -> Result<(), JsValue> {
        let weak = Rc::downgrade(&self.inner);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if let Some(inner) = weak.upgrade() {
                handler(&inner, &event);
            }
        }) as Box<dyn FnMut(_)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        self.inner.listeners.borrow_mut().push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
        Ok(())
    }
}

impl Drop for ParallaxEngine {
    fn drop(&mut self) {
        for listener in self.inner.listeners.borrow_mut().drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

impl core::fmt::Debug for ParallaxEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let engine = self.inner.engine.try_borrow();
        f.debug_struct("ParallaxEngine")
            .field(
                "sprites",
                &engine.as_ref().map_or(0, |e| e.sprites().len()),
            )
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Schedules one glide tick after `interval`.
///
/// The timer keeps only a weak reference; if the engine is gone when it
/// fires, nothing happens.
fn schedule_decay(inner: &Rc<EngineInner>, ticket: DecayTicket, interval: Duration) {
    let weak: Weak<EngineInner> = Rc::downgrade(inner);
    let callback = Closure::once_into_js(move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let next = match inner.engine.try_borrow_mut() {
            Ok(mut engine) => engine
                .decay_tick(ticket, crate::now())
                .map(|t| (t, engine.momentum().tick_interval)),
            Err(_) => None,
        };
        if let Some((ticket, interval)) = next {
            schedule_decay(&inner, ticket, interval);
        }
    });
    crate::set_timeout(&callback, timeout_millis(interval));
}

/// Rounds to whole milliseconds, saturating at the `i32` range `setTimeout`
/// accepts.
fn timeout_millis(interval: Duration) -> i32 {
    let ms = interval.as_millis_f64(crate::timebase()) + 0.5;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float-to-int casts saturate; durations are never negative"
    )]
    let ms = ms as i32;
    ms
}

/// The elements of `found` that are not in `bound`, without repeats.
fn unbound<T: PartialEq>(found: Vec<T>, bound: &[T]) -> Vec<T> {
    let mut fresh: Vec<T> = Vec::with_capacity(found.len());
    for el in found {
        if !bound.contains(&el) && !fresh.contains(&el) {
            fresh.push(el);
        }
    }
    fresh
}

/// Page x of every active touch.
fn touch_xs(event: &TouchEvent) -> Vec<f64> {
    let touches = event.touches();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| f64::from(t.page_x()))
        .collect()
}
