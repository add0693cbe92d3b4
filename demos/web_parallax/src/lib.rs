// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-layer parallax scene.
//!
//! Drag anywhere on the page (mouse or a single finger) to pan the scene;
//! release to let it glide. Layers nearer the viewer move faster. Append
//! `?trace` to the URL to log drag and glide events to the console.
//!
//! Build with: `wasm-pack build --target web demos/web_parallax`
//! Then serve `demos/web_parallax/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;

use parallax_backend_web::{ConsoleSink, ParallaxEngine};
use parallax_core::config::EngineConfig;
use wasm_bindgen::prelude::*;

/// Layer selectors with their speed multipliers, back to front.
const LAYERS: [(&str, f64); 4] = [
    ("#background", 1.0),
    ("#drone", 1.5),
    ("#globemaster", 3.0),
    ("#middle-ground", 2.0),
];

fn scene() -> EngineConfig {
    LAYERS
        .iter()
        .fold(EngineConfig::new(), |config, &(selector, speed)| {
            config.with_sprite(selector, speed)
        })
        .with_touch_target("body")
}

fn trace_requested() -> bool {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .is_some_and(|query| query.contains("trace"))
}

/// Entry point for the parallax demo.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let engine = ParallaxEngine::new(&scene())?;
    if trace_requested() {
        engine.set_trace_sink(Box::new(ConsoleSink::new()));
    }

    // The scene lives as long as the page.
    core::mem::forget(engine);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_registers_every_layer_in_order() {
        let config = scene();
        let selectors: alloc::vec::Vec<_> = config
            .sprites
            .iter()
            .map(|s| (s.selector.as_str(), s.speed))
            .collect();
        assert_eq!(selectors, LAYERS);
        assert_eq!(config.touch_target.as_deref(), Some("body"));
    }
}
