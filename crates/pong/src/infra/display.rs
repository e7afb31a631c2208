// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::interfaces::GraphicsStack;
use crate::core::models::GameError;

/// Display session owned by the desktop environment. The engine acquires the
/// actual window; the launcher only checks reachability and releases the
/// session once the game is over.
pub struct DesktopDisplay {
    acquired: bool,
}

impl DesktopDisplay {
    pub fn new() -> Self {
        Self { acquired: false }
    }
}

impl Default for DesktopDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsStack for DesktopDisplay {
    fn ensure_available(&mut self) -> Result<(), GameError> {
        if cfg!(target_os = "linux") && !display_server_reachable() {
            return Err(GameError::Graphics {
                detail: "neither DISPLAY nor WAYLAND_DISPLAY is set".to_string(),
            });
        }

        self.acquired = true;
        Ok(())
    }

    fn shutdown(&mut self) {
        if self.acquired {
            log::debug!("[pong.display] released the display session");
            self.acquired = false;
        }
    }
}

fn display_server_reachable() -> bool {
    let present = |name: &str| std::env::var_os(name).is_some_and(|value| !value.is_empty());
    present("DISPLAY") || present("WAYLAND_DISPLAY")
}
