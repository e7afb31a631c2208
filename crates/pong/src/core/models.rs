// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use anyhow::bail;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::str::FromStr;

/// Strength of the computer-controlled paddle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> anyhow::Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => bail!("'{}' is not a valid difficulty (choose from : easy, medium, hard)", raw),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl Display for WindowSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

/// Validated launch configuration, immutable after argument processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSettings {
    pub fullscreen: bool,
    pub difficulty: Difficulty,
    pub size: WindowSize,
}

#[derive(Debug)]
pub enum CleanupError {
    Unavailable,
    PermissionDenied { path: PathBuf, source: io::Error },
    Os { path: PathBuf, source: io::Error },
    Unexpected { detail: String },
}

impl Display for CleanupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanupError::Unavailable => f.write_str("no scratch directory available for this user"),
            CleanupError::PermissionDenied { path, .. } => {
                f.write_fmt(format_args!("missing permissions to remove {}", path.display()))
            },
            CleanupError::Os { path, source } => {
                f.write_fmt(format_args!("filesystem error while removing {} ({})", path.display(), source))
            },
            CleanupError::Unexpected { detail } => {
                f.write_fmt(format_args!("unexpected failure while cleaning ({})", detail))
            },
        }
    }
}

impl std::error::Error for CleanupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CleanupError::PermissionDenied { source, .. } | CleanupError::Os { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum GameError {
    Graphics { detail: String },
    EngineNotFound { path: PathBuf },
    Dependency { path: PathBuf, source: io::Error },
    SessionCrashed { status: ExitStatus },
    Unexpected { source: io::Error },
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Graphics { detail } => {
                f.write_fmt(format_args!("graphics subsystem unavailable ({})", detail))
            },
            GameError::EngineNotFound { path } => {
                f.write_fmt(format_args!("game engine not found at {}", path.display()))
            },
            GameError::Dependency { path, source } => f.write_fmt(format_args!(
                "game engine at {} could not be started ({})",
                path.display(),
                source
            )),
            GameError::SessionCrashed { status } => {
                f.write_fmt(format_args!("game session ended abnormally ({})", status))
            },
            GameError::Unexpected { source } => {
                f.write_fmt(format_args!("unexpected failure while running the game ({})", source))
            },
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Dependency { source, .. } | GameError::Unexpected { source } => Some(source),
            _ => None,
        }
    }
}

/// Everything dispatch can surface to the process boundary.
#[derive(Debug)]
pub enum LaunchFailure {
    Cleanup(CleanupError),
    Game(GameError),
}

impl From<CleanupError> for LaunchFailure {
    fn from(error: CleanupError) -> Self {
        LaunchFailure::Cleanup(error)
    }
}

impl From<GameError> for LaunchFailure {
    fn from(error: GameError) -> Self {
        LaunchFailure::Game(error)
    }
}

impl Display for LaunchFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchFailure::Cleanup(error) => error.fmt(f),
            LaunchFailure::Game(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for LaunchFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchFailure::Cleanup(error) => Some(error),
            LaunchFailure::Game(error) => Some(error),
        }
    }
}
