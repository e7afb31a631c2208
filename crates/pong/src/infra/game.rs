// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::interfaces::GameSession;
use crate::core::models::{GameError, GameSettings};
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::Command;

pub static PONG_ENGINE_ENV: &str = "PONG_ENGINE";
static ENGINE_BINARY: &str = "pong-engine";

/// Runs the game engine installed next to the launcher as a blocking child process.
pub struct GameProcess {
    executable: PathBuf,
}

impl GameProcess {
    pub fn locate() -> Self {
        if let Ok(overridden) = env::var(PONG_ENGINE_ENV) {
            return Self::new(PathBuf::from(overridden));
        }

        let sibling = env::current_exe()
            .map(|launcher| launcher.with_file_name(ENGINE_BINARY))
            .unwrap_or_else(|_| PathBuf::from(ENGINE_BINARY));

        Self::new(sibling)
    }

    pub fn new(executable: PathBuf) -> Self {
        Self { executable }
    }

    fn arguments(settings: &GameSettings) -> Vec<String> {
        let mut arguments = vec![
            "--difficulty".to_string(),
            settings.difficulty.to_string(),
            "--width".to_string(),
            settings.size.width.to_string(),
            "--height".to_string(),
            settings.size.height.to_string(),
        ];

        if settings.fullscreen {
            arguments.push("--fullscreen".to_string());
        }

        arguments
    }

    fn classify_spawn_failure(&self, cause: io::Error) -> GameError {
        let path = self.executable.clone();
        match cause.kind() {
            io::ErrorKind::NotFound => GameError::EngineNotFound { path },
            io::ErrorKind::PermissionDenied => GameError::Dependency { path, source: cause },
            _ => GameError::Unexpected { source: cause },
        }
    }
}

impl GameSession for GameProcess {
    fn run(&self, settings: &GameSettings) -> Result<(), GameError> {
        if !self.executable.is_file() {
            return Err(GameError::EngineNotFound {
                path: self.executable.clone(),
            });
        }

        log::debug!("[pong.game] launching {}", self.executable.display());

        let status = Command::new(&self.executable)
            .args(Self::arguments(settings))
            .status()
            .map_err(|cause| self.classify_spawn_failure(cause))?;

        if !status.success() {
            return Err(GameError::SessionCrashed { status });
        }

        Ok(())
    }
}
