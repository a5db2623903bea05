// ABOUTME: Ingredient domain module covering normalized ingredient sets and pantry enrichment
// ABOUTME: Exposes the IngredientSet type and the enrichment operations used before prompting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Handling
//!
//! Detected ingredient labels arrive as free-form classifier output. This
//! module normalizes them into an ordered, duplicate-free [`IngredientSet`]
//! and pads short sets from a fixed pantry pool so the generation prompt
//! always has enough material to work with.

/// Pantry-pool enrichment for short ingredient sets
pub mod enrichment;
/// Ordered, duplicate-free ingredient collections
pub mod set;

pub use enrichment::{enrich, enrich_with_rng};
pub use set::IngredientSet;
