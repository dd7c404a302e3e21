// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! Presentation layer: HTTP API.

pub mod api;

pub use api::app;
