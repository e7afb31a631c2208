// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::CleanupError;
use crate::infra::scratch::ScratchStore;

pub struct PongCleaner {
    store: ScratchStore,
}

impl PongCleaner {
    pub fn new(store: ScratchStore) -> Self {
        Self { store }
    }

    pub fn clean_temporary_files(&self) -> Result<usize, CleanupError> {
        self.store.remove_all()
    }
}
