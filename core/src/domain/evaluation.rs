// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! Evaluation request/result types and the closed set of selectable models.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::backend::BackendError;
use crate::domain::prompt::PromptStoreError;

/// The closed set of LLM backends a client may select.
///
/// Adding a backend means adding a variant here, a prompt-key prefix in
/// [`ModelChoice::prompt_prefix`], and an adapter registration in the
/// backend registry. There is no default variant: an unrecognized wire
/// string fails parsing rather than silently routing to a fallback model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelChoice {
    /// Claude 3 Sonnet, chat-style messages API.
    #[serde(rename = "claude")]
    ClaudeV3,

    /// Llama 2 70B, completion-style single-prompt API.
    #[serde(rename = "llama")]
    Llama2,
}

impl ModelChoice {
    /// Prompt-key prefix for this model.
    ///
    /// This is the single table keeping backend identity and prompt-key
    /// derivation in lock-step; no call site may inline these literals.
    pub fn prompt_prefix(&self) -> &'static str {
        match self {
            ModelChoice::ClaudeV3 => "claude-sonnet",
            ModelChoice::Llama2 => "llama-70b",
        }
    }

    /// Derive the prompt-store key for this model and target language.
    pub fn prompt_key(&self, language: &str) -> String {
        format!("{}-{}", self.prompt_prefix(), language)
    }

    /// Wire name as it appears in inbound requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelChoice::ClaudeV3 => "claude",
            ModelChoice::Llama2 => "llama",
        }
    }

    pub fn parse(value: &str) -> Result<Self, EvaluationError> {
        match value {
            "claude" => Ok(ModelChoice::ClaudeV3),
            "llama" => Ok(ModelChoice::Llama2),
            other => Err(EvaluationError::UnknownModelChoice(other.to_string())),
        }
    }
}

/// A single chat turn.
///
/// This service only ever sends one `"user"` turn per evaluation, but the
/// shape stays multi-turn so chat-style backends receive a proper message
/// list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// One evaluation of a source/translation pair. Transient, one per call.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub source: String,
    pub translation: String,
    pub language: String,
    pub model_choice: ModelChoice,
    pub temperature: f32,
}

impl EvaluationRequest {
    /// Temperature is required and must lie in [0, 1]; there is no
    /// defaulting when the caller omits or mangles it.
    pub fn validate(&self) -> Result<(), EvaluationError> {
        if !(0.0..=1.0).contains(&self.temperature) || self.temperature.is_nan() {
            return Err(EvaluationError::InvalidInput(format!(
                "temperature must be in [0, 1], got {}",
                self.temperature
            )));
        }
        Ok(())
    }

    /// The rating instruction sent as the user turn.
    pub fn user_message(&self) -> Message {
        let content = format!(
            "Rate the translation quality of the following translation:\n\n\
             <english>{source}</english>\n\
             <{language}>{translation}</{language}>\n\n\
             Think step by step, identifying any issues with the translation \
             and how that affects the rating.\n\
             Output your rating assessment last.",
            source = self.source,
            translation = self.translation,
            language = self.language,
        );
        Message::user(content)
    }
}

/// Normalized evaluation output.
///
/// `rating_text` is the plain extracted string; it is never re-encoded as
/// JSON on the way out, regardless of which backend produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub rating_text: String,
}

/// Errors surfaced by the evaluation pipeline.
///
/// Nothing here is retried or recovered internally; a request either fully
/// succeeds or fully fails with one of these.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("unknown model choice: '{0}'")]
    UnknownModelChoice(String),

    #[error("no backend registered for model choice '{0}'")]
    UnsupportedModel(&'static str),

    #[error("no prompt stored under key '{0}'")]
    PromptNotFound(String),

    #[error("invalid request: {0}")]
    InvalidInput(String),

    #[error("prompt store: {0}")]
    Store(#[from] PromptStoreError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
