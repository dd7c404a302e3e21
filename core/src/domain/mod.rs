// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! Domain layer: evaluation types, prompt storage contract, and the
//! backend anti-corruption interfaces. No vendor types cross this boundary.

pub mod backend;
pub mod evaluation;
pub mod prompt;

pub use backend::{BackendError, ModelBackend, ModelInvoker};
pub use evaluation::{
    EvaluationError, EvaluationRequest, EvaluationResult, Message, ModelChoice,
};
pub use prompt::{Prompt, PromptStore, PromptStoreError};
