// ABOUTME: Recipe synthesis orchestrator tying enrichment, prompting, generation, and parsing together
// ABOUTME: Total at the public boundary, substituting the fallback catalog for every failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Synthesizer
//!
//! Orchestrates one synthesis request end to end. The backend handle is
//! optional and fixed at construction; requests share it immutably, so a
//! failing request never affects the next one. [`RecipeSynthesizer::synthesize`]
//! absorbs every internal failure into the fallback catalog and always
//! returns at least one recipe.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::config::SnapConfig;
use crate::errors::AppError;
use crate::ingredients::{enrichment, IngredientSet};
use crate::llm::{prompts, GenerationBackend, OpenAiCompatibleBackend};
use crate::recipes::models::Recipe;
use crate::recipes::{fallback, parser};

/// Why a synthesis attempt could not produce a generated recipe
///
/// Internal to the pipeline; every variant is absorbed into fallback
/// behavior before the caller sees a result.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// No backend handle was configured at construction
    #[error("no generation backend configured")]
    BackendUnavailable,

    /// The detected labels normalized down to an empty set
    #[error("no ingredients detected")]
    NoIngredients,

    /// The backend call failed for this request
    #[error("generation failed: {0}")]
    Generation(#[from] AppError),
}

/// Turns detected ingredient labels into recipes
///
/// Constructed once at startup; the backend handle is process-wide and
/// immutable for the synthesizer's lifetime.
pub struct RecipeSynthesizer {
    backend: Option<Arc<dyn GenerationBackend>>,
}

impl RecipeSynthesizer {
    /// Create a synthesizer with an optional generation backend
    ///
    /// With `None` every request is served from the fallback catalog.
    #[must_use]
    pub const fn new(backend: Option<Arc<dyn GenerationBackend>>) -> Self {
        Self { backend }
    }

    /// Build a synthesizer according to configuration
    ///
    /// Generation disabled or a backend construction failure both degrade
    /// to a fallback-only synthesizer rather than refusing to start.
    #[must_use]
    pub fn from_config(config: &SnapConfig) -> Self {
        if !config.generation.enabled {
            info!("Recipe generation disabled, serving fallback recipes only");
            return Self::new(None);
        }

        match OpenAiCompatibleBackend::new(config.generation.clone()) {
            Ok(backend) => Self::new(Some(Arc::new(backend))),
            Err(err) => {
                warn!(
                    "Failed to initialize generation backend, serving fallback recipes only: {err}"
                );
                Self::new(None)
            }
        }
    }

    /// Whether a generation backend is configured
    #[must_use]
    pub const fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Synthesize recipes for the detected ingredient labels
    ///
    /// Total: any failure along the pipeline yields the default fallback
    /// recipe for this request only. The returned vector always holds at
    /// least one recipe.
    #[instrument(skip(self, detected), fields(detected_count = detected.len()))]
    pub async fn synthesize(&self, detected: &[String]) -> Vec<Recipe> {
        match self.try_synthesize(detected).await {
            Ok(recipe) => {
                info!("Synthesized recipe: {}", recipe.name);
                vec![recipe]
            }
            Err(err) => {
                warn!("Recipe synthesis fell back to the catalog: {err}");
                vec![fallback::default_recipe()]
            }
        }
    }

    /// The fallible pipeline behind [`synthesize`](Self::synthesize)
    ///
    /// Kept separate so tests can observe which failure path was taken.
    async fn try_synthesize(&self, detected: &[String]) -> Result<Recipe, SynthesisError> {
        let backend = self
            .backend
            .as_ref()
            .ok_or(SynthesisError::BackendUnavailable)?;

        let ingredients = IngredientSet::from_labels(detected);
        if ingredients.is_empty() {
            return Err(SynthesisError::NoIngredients);
        }

        let enriched = enrichment::enrich(ingredients);
        let prompt = prompts::build_recipe_prompt(&enriched);

        debug!(
            "Requesting completion from {} for {} ingredients",
            backend.name(),
            enriched.len()
        );
        let raw = backend.generate(&prompt).await?;
        let completion = prompts::extract_completion(&raw);

        Ok(parser::parse(completion))
    }
}
