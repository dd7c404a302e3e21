// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! Backend anti-corruption interfaces.
//!
//! Each LLM backend family speaks an incompatible request and response
//! schema. [`ModelBackend`] keeps that asymmetry inside one adapter per
//! family: the adapter owns its request-body construction and its
//! response-text extraction, and the rest of the system only ever sees a
//! `(model_id, body)` pair going out and a rating string coming back.
//! Adapters are registered in a lookup table keyed by
//! [`crate::domain::ModelChoice`], so a forgotten registration is a hard
//! `UnsupportedModel` failure instead of a silent fallthrough.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::evaluation::Message;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("backend returned an unreadable payload: {0}")]
    InvalidPayload(String),

    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}

/// Schema adapter for one backend family.
pub trait ModelBackend: Send + Sync {
    /// Backend model identifier used on the wire.
    fn model_id(&self) -> &str;

    /// Build the backend-specific request body.
    ///
    /// Sampling defaults other than `temperature` are fixed per backend
    /// and never client-configurable.
    fn build_request(&self, system_prompt: &str, messages: &[Message], temperature: f32) -> Value;

    /// Extract the generated rating text from a raw backend response.
    ///
    /// An extraction that comes up empty is a malformed response, never a
    /// valid empty rating.
    fn extract_text(&self, response: &Value) -> Result<String, BackendError>;
}

/// Transport for built requests; one synchronous call, no retries here.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Value, BackendError>;
}
