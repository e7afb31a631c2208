// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::CleanupError;
use std::env::home_dir;
use std::fs;
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

static SCRATCH_FOLDER: &str = ".pong";

pub static PONG_SCRATCH_ENV: &str = "PONG_SCRATCH";

/// Launcher-owned folder where game sessions leave logs, replays and
/// stray temporary files.
pub struct ScratchStore {
    scratch_dir: PathBuf,
}

impl ScratchStore {
    pub fn locate() -> Option<Self> {
        if let Ok(overridden) = std::env::var(PONG_SCRATCH_ENV) {
            return Some(Self::at(PathBuf::from(overridden)));
        }

        home_dir().map(|dir| Self::at(dir.join(SCRATCH_FOLDER)))
    }

    pub fn at(scratch_dir: PathBuf) -> Self {
        Self { scratch_dir }
    }

    pub fn remove_all(&self) -> Result<usize, CleanupError> {
        if !self.scratch_dir.exists() {
            log::info!("[pong.scratch] nothing to remove at {}", self.scratch_dir.display());
            return Ok(0);
        }

        let files = self.count_files()?;
        fs::remove_dir_all(&self.scratch_dir).map_err(|cause| self.classify_removal_failure(cause))?;

        log::info!("[pong.scratch] removed {}", self.scratch_dir.display());
        Ok(files)
    }

    fn count_files(&self) -> Result<usize, CleanupError> {
        let mut files = 0;

        for entry in WalkDir::new(&self.scratch_dir) {
            let entry = entry.map_err(classify_walk_failure)?;
            if entry.file_type().is_file() {
                files += 1;
            }
        }

        Ok(files)
    }

    fn classify_removal_failure(&self, source: io::Error) -> CleanupError {
        let path = self.scratch_dir.clone();
        match source.kind() {
            io::ErrorKind::PermissionDenied => CleanupError::PermissionDenied { path, source },
            _ => CleanupError::Os { path, source },
        }
    }
}

fn classify_walk_failure(cause: walkdir::Error) -> CleanupError {
    let path = cause.path().map(PathBuf::from).unwrap_or_default();

    match cause.into_io_error() {
        Some(source) if source.kind() == io::ErrorKind::PermissionDenied => {
            CleanupError::PermissionDenied { path, source }
        },
        Some(source) => CleanupError::Os { path, source },
        None => CleanupError::Unexpected {
            detail: format!("cannot traverse {}", path.display()),
        },
    }
}
