// ABOUTME: Main library entry point for the RecipeSnap recipe synthesis core
// ABOUTME: Turns detected ingredient labels into structured recipes with deterministic fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # RecipeSnap
//!
//! The ingredient-driven recipe synthesis core behind RecipeSnap. Upstream
//! classifiers turn a food photo into a list of ingredient labels; this crate
//! turns that list into a structured recipe record with a name, measured
//! ingredients, and step-by-step instructions.
//!
//! ## Pipeline
//!
//! - **Enrichment**: sparse detections are padded from a pool of plausible
//!   secondary ingredients so prompts always have something to work with
//! - **Prompt building**: the ingredient set is rendered into a fixed
//!   instruction template for a text-generation backend
//! - **Parsing**: the backend's free-text response is converted into a
//!   structured [`recipes::Recipe`] by a line-oriented state machine
//! - **Fallback**: when generation is disabled or the backend call fails, a
//!   curated recipe is returned instead - synthesis never errors outward
//!
//! ## Example
//!
//! ```rust,no_run
//! use recipesnap::config::SnapConfig;
//! use recipesnap::recipes::RecipeSynthesizer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SnapConfig::from_env();
//!     let synthesizer = RecipeSynthesizer::from_config(&config);
//!
//!     let detected = vec!["tomato".to_owned(), "onion".to_owned()];
//!     let recipes = synthesizer.synthesize(&detected).await;
//!     println!("{}", recipes[0].name);
//! }
//! ```

/// Environment-driven configuration types
pub mod config;

/// Unified error handling with typed error codes
pub mod errors;

/// Ingredient sets and detection enrichment
pub mod ingredients;

/// Generation backend SPI, prompts, and the `OpenAI`-compatible adapter
pub mod llm;

/// Structured logging configuration
pub mod logging;

/// Recipe models, response parsing, fallback catalog, and synthesis
pub mod recipes;
