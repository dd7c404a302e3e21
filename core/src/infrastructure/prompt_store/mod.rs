// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! Prompt Store Infrastructure Module
//!
//! Concrete implementations of the PromptStore trait plus the seeding
//! bootstrap that loads initial prompt records from disk.

pub mod memory;
pub mod seed;
pub mod sled_store;

pub use memory::MemoryPromptStore;
pub use seed::seed_from_dir;
pub use sled_store::SledPromptStore;

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::prompt::{PromptStore, PromptStoreError};

/// Prompt store backend configuration
#[derive(Debug, Clone)]
pub enum PromptStoreBackend {
    /// Embedded sled database (persistent, single node)
    Sled { path: PathBuf },

    /// In-memory map (tests, ephemeral runs)
    Memory,
}

/// Factory function to create a prompt store from configuration
pub fn create_prompt_store(
    backend: PromptStoreBackend,
) -> Result<Arc<dyn PromptStore>, PromptStoreError> {
    match backend {
        PromptStoreBackend::Sled { path } => Ok(Arc::new(SledPromptStore::open(path)?)),
        PromptStoreBackend::Memory => Ok(Arc::new(MemoryPromptStore::new())),
    }
}
