// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! Backend adapter registry.
//!
//! One adapter per backend family, dispatched through a lookup table keyed
//! by [`ModelChoice`]. A choice with no registered adapter is a hard
//! `UnsupportedModel` failure; no request body is built for it.

pub mod claude;
pub mod invoker;
pub mod llama;

pub use claude::ClaudeBackend;
pub use invoker::HttpModelInvoker;
pub use llama::LlamaBackend;

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::backend::ModelBackend;
use crate::domain::evaluation::{EvaluationError, ModelChoice};

pub struct BackendRegistry {
    backends: HashMap<ModelChoice, Arc<dyn ModelBackend>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Registry with every supported backend wired to its stock adapter.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ModelChoice::ClaudeV3, Arc::new(ClaudeBackend::new()));
        registry.register(ModelChoice::Llama2, Arc::new(LlamaBackend::new()));
        registry
    }

    pub fn register(&mut self, choice: ModelChoice, backend: Arc<dyn ModelBackend>) {
        tracing::info!(
            choice = choice.as_str(),
            model_id = backend.model_id(),
            "registering backend adapter"
        );
        self.backends.insert(choice, backend);
    }

    pub fn get(&self, choice: ModelChoice) -> Result<&Arc<dyn ModelBackend>, EvaluationError> {
        self.backends
            .get(&choice)
            .ok_or(EvaluationError::UnsupportedModel(choice.as_str()))
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
