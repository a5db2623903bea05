// ABOUTME: Generation backend abstraction for pluggable text-generation integration
// ABOUTME: Defines the contract backends must implement plus the recipe prompt helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Generation Backend Service Provider Interface
//!
//! This module defines the contract that text-generation backends must
//! implement to plug into the recipe synthesis pipeline. The orchestrator
//! holds backends behind `Arc<dyn GenerationBackend>` and treats every
//! failure as recoverable, so implementations only need to report errors
//! honestly through [`AppResult`].
//!
//! ## Key Concepts
//!
//! - **`GenerationBackend`**: Async trait for single-prompt completion
//! - **`prompts`**: Instruction-format prompt rendering and completion extraction
//! - **`OpenAiCompatibleBackend`**: Adapter for Ollama, vLLM, `LocalAI`, and
//!   any other `OpenAI`-compatible chat completions endpoint
//!
//! ## Example: Driving a Backend
//!
//! ```rust,no_run
//! use recipesnap::ingredients::IngredientSet;
//! use recipesnap::llm::{prompts, GenerationBackend};
//!
//! async fn example(backend: &dyn GenerationBackend) {
//!     let ingredients = IngredientSet::from_labels(&["tomato".to_owned()]);
//!     let prompt = prompts::build_recipe_prompt(&ingredients);
//!     let completion = backend.generate(&prompt).await;
//! }
//! ```

mod openai_compatible;
pub mod prompts;

pub use openai_compatible::OpenAiCompatibleBackend;

use async_trait::async_trait;

use crate::errors::AppResult;

/// Contract for text-generation backends
///
/// Implementations wrap one inference endpoint (local or cloud) behind a
/// single-prompt completion call. Backends are shared across requests via
/// `Arc`, so every method takes `&self` and implementations must be
/// `Send + Sync`.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Short identifier for logging (e.g. `"ollama"`)
    fn name(&self) -> &'static str;

    /// Model identifier sent with each completion request
    fn default_model(&self) -> &str;

    /// Complete a single prompt and return the raw generated text
    ///
    /// The returned text is unprocessed; callers strip instruction-format
    /// framing with [`prompts::extract_completion`].
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is unreachable, rejects the
    /// request, or produces an unparseable response.
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Check whether the backend is reachable and serving
    ///
    /// # Errors
    ///
    /// Returns an error if the check itself could not be performed; an
    /// unhealthy-but-reachable backend is `Ok(false)`.
    async fn health_check(&self) -> AppResult<bool>;
}
