// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! Prompt storage contract.
//!
//! The store is a plain key-value collaborator: string ids, string prompt
//! texts, no transactions, no versioning. Implementations live in
//! `infrastructure/prompt_store/`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored system prompt.
///
/// Ids are composite keys of the form `<backend-prefix>-<language>`,
/// e.g. `claude-sonnet-german`. Records are overwritten in place on update
/// and never deleted in normal operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum PromptStoreError {
    #[error("prompt store I/O: {0}")]
    Io(String),

    #[error("corrupt prompt record under key '{0}'")]
    Corrupt(String),
}

/// Key-value access to stored prompts.
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Fetch the prompt text stored under `id`, if any.
    async fn get(&self, id: &str) -> Result<Option<String>, PromptStoreError>;

    /// Store `text` under `id`, overwriting any existing record.
    async fn put(&self, id: &str, text: &str) -> Result<(), PromptStoreError>;

    /// All stored prompts, order unspecified.
    async fn scan(&self) -> Result<Vec<Prompt>, PromptStoreError>;
}
