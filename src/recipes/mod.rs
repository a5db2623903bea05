// ABOUTME: Recipe synthesis module covering models, response parsing, fallbacks, and orchestration
// ABOUTME: Turns detected ingredients into structured recipes via the generation backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Synthesis
//!
//! The synthesis pipeline turns detected ingredient labels into structured
//! recipes:
//!
//! 1. Normalize and enrich the detected ingredients
//! 2. Render the generation prompt and call the backend
//! 3. Parse the loosely structured completion into a [`Recipe`]
//! 4. Substitute a pre-authored fallback recipe at every failure boundary
//!
//! The public entry point is [`RecipeSynthesizer::synthesize`], which is
//! total: callers always receive at least one recipe.

/// Pre-authored fallback recipes for failure paths
pub mod fallback;
/// Recipe data structures
pub mod models;
/// State-machine parser for raw generation text
pub mod parser;
/// Synthesis orchestration over the generation backend
pub mod synthesizer;

pub use models::Recipe;
pub use synthesizer::{RecipeSynthesizer, SynthesisError};
