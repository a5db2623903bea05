// ABOUTME: Pantry-pool enrichment that pads short ingredient sets before prompt construction
// ABOUTME: Shuffles a fixed secondary pool with a request-local RNG and appends unused entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient enrichment
//!
//! A recipe prompt built from one or two ingredients produces poor
//! completions, so sets below the minimum are padded with entries drawn at
//! random from a fixed pantry pool. Existing entries are never removed or
//! reordered, and nothing is ever appended twice.

use crate::ingredients::set::IngredientSet;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Ingredient count below which the set is padded from the pantry pool
const MIN_INGREDIENTS: usize = 3;

/// Number of pool entries appended when padding
const PAD_COUNT: usize = 3;

/// Common pantry ingredients used to pad short detection sets
const SECONDARY_INGREDIENTS: [&str; 19] = [
    "tomato", "lettuce", "onion", "garlic", "potato", "cheese", "bread", "rice", "pasta", "beef",
    "chicken", "fish", "eggs", "milk", "butter", "oil", "sugar", "salt", "pepper",
];

/// Pad a short ingredient set from the pantry pool
///
/// Sets with at least three ingredients are returned unchanged. Uses a
/// thread-local random source; see [`enrich_with_rng`] for a seedable
/// variant.
#[must_use]
pub fn enrich(detected: IngredientSet) -> IngredientSet {
    enrich_with_rng(detected, &mut rand::thread_rng())
}

/// Pad a short ingredient set using the provided random source
///
/// The pool is shuffled once per call, then entries not already present are
/// appended until three have been added or the pool is exhausted.
#[must_use]
pub fn enrich_with_rng<R: Rng + ?Sized>(detected: IngredientSet, rng: &mut R) -> IngredientSet {
    if detected.len() >= MIN_INGREDIENTS {
        return detected;
    }

    let mut pool = SECONDARY_INGREDIENTS;
    pool.shuffle(rng);

    let mut enriched = detected;
    let mut appended = 0;
    for candidate in pool {
        if appended == PAD_COUNT {
            break;
        }
        if enriched.insert(candidate) {
            appended += 1;
        }
    }

    debug!(
        total = enriched.len(),
        appended, "Enriched ingredient set from pantry pool"
    );
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set_of(labels: &[&str]) -> IngredientSet {
        let owned: Vec<String> = labels.iter().map(|label| (*label).to_owned()).collect();
        IngredientSet::from_labels(&owned)
    }

    #[test]
    fn test_identity_for_three_or_more() {
        let detected = set_of(&["tomato", "onion", "garlic"]);
        let enriched = enrich(detected.clone());
        assert_eq!(enriched, detected);

        let four = set_of(&["tomato", "onion", "garlic", "basil"]);
        assert_eq!(enrich(four.clone()), four);
    }

    #[test]
    fn test_pads_exactly_three_entries() {
        let enriched = enrich(set_of(&["tomato"]));
        assert_eq!(enriched.len(), 4);
        assert_eq!(enriched.as_slice()[0], "tomato");
    }

    #[test]
    fn test_pads_empty_set() {
        let enriched = enrich(IngredientSet::new());
        assert_eq!(enriched.len(), 3);
    }

    #[test]
    fn test_existing_pool_entries_are_skipped() {
        let enriched = enrich(set_of(&["tomato", "onion"]));
        assert_eq!(enriched.len(), 5);
        assert_eq!(&enriched.as_slice()[..2], ["tomato", "onion"]);

        let unique: std::collections::HashSet<&String> = enriched.iter().collect();
        assert_eq!(unique.len(), enriched.len());
    }

    #[test]
    fn test_seeded_enrichment_is_deterministic() {
        let first = enrich_with_rng(set_of(&["eggs"]), &mut StdRng::seed_from_u64(42));
        let second = enrich_with_rng(set_of(&["eggs"]), &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);

        let other_seed = enrich_with_rng(set_of(&["eggs"]), &mut StdRng::seed_from_u64(43));
        assert_eq!(other_seed.len(), first.len());
    }

    #[test]
    fn test_off_pool_input_is_preserved() {
        let enriched = enrich(set_of(&["dragonfruit", "saffron"]));
        assert_eq!(enriched.len(), 5);
        assert_eq!(&enriched.as_slice()[..2], ["dragonfruit", "saffron"]);
    }
}
