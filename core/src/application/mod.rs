// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! Application layer: orchestration of the evaluation pipeline.

pub mod evaluation_service;

pub use evaluation_service::EvaluationService;
