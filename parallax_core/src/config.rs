// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine construction options.

use alloc::string::String;
use alloc::vec::Vec;

use crate::momentum::MomentumConfig;
use crate::sprite::SpriteSpec;

/// Options recognized when building an [`Engine`](crate::engine::Engine).
///
/// Every field is optional in spirit: an empty sprite list yields an engine
/// that scrolls nothing, and without a touch target no input is wired up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineConfig {
    /// Sprites to register, in update order.
    pub sprites: Vec<SpriteSpec>,
    /// Selector of the element that receives drag input.
    pub touch_target: Option<String>,
    /// Momentum tuning.
    pub momentum: MomentumConfig,
}

impl EngineConfig {
    /// An empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sprite.
    #[must_use]
    pub fn with_sprite(mut self, selector: impl Into<String>, speed: f64) -> Self {
        self.sprites.push(SpriteSpec::new(selector, speed));
        self
    }

    /// Sets the drag target selector.
    #[must_use]
    pub fn with_touch_target(mut self, selector: impl Into<String>) -> Self {
        self.touch_target = Some(selector.into());
        self
    }

    /// Replaces the momentum tuning.
    #[must_use]
    pub fn with_momentum(mut self, momentum: MomentumConfig) -> Self {
        self.momentum = momentum;
        self
    }
}
