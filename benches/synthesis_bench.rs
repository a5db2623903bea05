// ABOUTME: Criterion benchmarks for the recipe synthesis pipeline stages
// ABOUTME: Measures parsing, prompt rendering, enrichment, and end-to-end synthesis latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for recipe synthesis.
//!
//! Measures the pure pipeline stages individually plus the orchestrated
//! path over a canned backend, so generation latency is excluded and the
//! crate's own overhead is what gets tracked.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use recipesnap::errors::AppResult;
use recipesnap::ingredients::{enrich_with_rng, IngredientSet};
use recipesnap::llm::prompts::build_recipe_prompt;
use recipesnap::llm::GenerationBackend;
use recipesnap::recipes::parser::parse;
use recipesnap::recipes::RecipeSynthesizer;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Representative completion with preamble, both sections, and trailing chatter
const COMPLETION: &str = "Here is a recipe you will love!

Rustic Tomato Rice

A comforting one-pot dinner built from pantry staples.

Ingredients:
- 2 cups rice
- 3 ripe tomatoes, chopped
- 1 onion, diced
- 2 cloves garlic
- 1 tbsp olive oil
- fresh parsley

Instructions:
1. Saute the onion and garlic in olive oil.
2. Stir in the tomatoes and cook until soft.
3. Add the rice and two cups of water.
4. Cover and simmer until the rice is tender.
5. Garnish and serve.

Preparation time: 10 minutes
Cooking time: 30 minutes

Enjoy your meal!";

struct CannedBackend;

#[async_trait]
impl GenerationBackend for CannedBackend {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn default_model(&self) -> &str {
        "canned-model"
    }

    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        Ok(COMPLETION.to_owned())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_completion", |b| {
        b.iter(|| parse(black_box(COMPLETION)));
    });
}

fn bench_build_prompt(c: &mut Criterion) {
    let ingredients = IngredientSet::default_detection();
    c.bench_function("build_recipe_prompt", |b| {
        b.iter(|| build_recipe_prompt(black_box(&ingredients)));
    });
}

fn bench_enrich(c: &mut Criterion) {
    let detected = IngredientSet::from_labels(&["tofu".to_owned()]);
    c.bench_function("enrich_sparse_detection", |b| {
        let mut rng = StdRng::seed_from_u64(99);
        b.iter_batched(
            || detected.clone(),
            |set| enrich_with_rng(black_box(set), &mut rng),
            BatchSize::SmallInput,
        );
    });
}

fn bench_synthesize(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let detected = vec!["tomato".to_owned(), "onion".to_owned()];

    let generating = RecipeSynthesizer::new(Some(Arc::new(CannedBackend)));
    c.bench_function("synthesize_with_canned_backend", |b| {
        b.iter(|| rt.block_on(async { generating.synthesize(black_box(&detected)).await }));
    });

    let offline = RecipeSynthesizer::new(None);
    c.bench_function("synthesize_fallback_only", |b| {
        b.iter(|| rt.block_on(async { offline.synthesize(black_box(&detected)).await }));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_build_prompt,
    bench_enrich,
    bench_synthesize
);
criterion_main!(benches);
