// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! Translation quality assessment core.
//!
//! Domain types and the model-call adapter layer: prompt resolution,
//! per-backend request construction, backend invocation, and response
//! normalization behind one output shape.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
