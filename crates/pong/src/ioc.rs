// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::infra::display::DesktopDisplay;
use crate::infra::game::GameProcess;
use crate::infra::scratch::ScratchStore;
use crate::pong::Pong;
use crate::pong::cleaner::PongCleaner;

fn scratch_cleaner() -> Option<PongCleaner> {
    ScratchStore::locate().map(PongCleaner::new)
}

pub fn create_pong() -> Pong<GameProcess, DesktopDisplay> {
    Pong::new(scratch_cleaner(), GameProcess::locate(), DesktopDisplay::new())
}
