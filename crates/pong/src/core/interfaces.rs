// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::{GameError, GameSettings};

pub trait GameSession {
    fn run(&self, settings: &GameSettings) -> Result<(), GameError>;
}

pub trait GraphicsStack {
    fn ensure_available(&mut self) -> Result<(), GameError>;

    /// Must be safe to call before any acquisition and more than once.
    fn shutdown(&mut self);
}
