// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! Evaluation pipeline orchestration.
//!
//! One stateless unit of work per call: resolve the stored system prompt,
//! look up the backend adapter, build the body, invoke, normalize. Every
//! stage failure propagates to the caller as-is; no stage is retried.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::backend::ModelInvoker;
use crate::domain::evaluation::{EvaluationError, EvaluationRequest, EvaluationResult};
use crate::domain::prompt::{Prompt, PromptStore};
use crate::infrastructure::backend::BackendRegistry;

pub struct EvaluationService {
    store: Arc<dyn PromptStore>,
    invoker: Arc<dyn ModelInvoker>,
    backends: BackendRegistry,
}

impl EvaluationService {
    pub fn new(
        store: Arc<dyn PromptStore>,
        invoker: Arc<dyn ModelInvoker>,
        backends: BackendRegistry,
    ) -> Self {
        Self {
            store,
            invoker,
            backends,
        }
    }

    /// Run the full pipeline for one evaluation request.
    pub async fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResult, EvaluationError> {
        request.validate()?;

        let key = request.model_choice.prompt_key(&request.language);
        debug!(%key, "resolving system prompt");
        let system_prompt = self
            .store
            .get(&key)
            .await?
            .ok_or_else(|| EvaluationError::PromptNotFound(key.clone()))?;

        let backend = self.backends.get(request.model_choice)?;
        let messages = vec![request.user_message()];
        let body = backend.build_request(&system_prompt, &messages, request.temperature);

        info!(model_id = backend.model_id(), "invoking backend");
        let response = self.invoker.invoke(backend.model_id(), &body).await?;

        let rating_text = backend.extract_text(&response)?;
        debug!(chars = rating_text.len(), "normalized backend response");

        Ok(EvaluationResult { rating_text })
    }

    /// All stored prompts, order unspecified.
    pub async fn list_prompts(&self) -> Result<Vec<Prompt>, EvaluationError> {
        Ok(self.store.scan().await?)
    }

    /// Overwrite (or create) the prompt stored under `id`.
    pub async fn update_prompt(&self, id: &str, text: &str) -> Result<(), EvaluationError> {
        info!(id, "updating prompt");
        Ok(self.store.put(id, text).await?)
    }
}
