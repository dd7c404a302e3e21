// Copyright (c) 2026 tqa contributors
// SPDX-License-Identifier: MIT

//! Infrastructure layer: concrete backend adapters, the HTTP invoker, and
//! prompt store implementations.

pub mod backend;
pub mod prompt_store;
