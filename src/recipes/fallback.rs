// ABOUTME: Pre-authored fallback recipes served when generation is unavailable or fails
// ABOUTME: Holds a static catalog keyed by ingredient combination, built once per process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fallback recipe catalog
//!
//! Three fully populated recipes keyed by ingredient combination, built once
//! behind a [`LazyLock`] and cloned out on access. The orchestrator always
//! serves the default entry; [`lookup`] exposes the rest of the catalog.

use crate::recipes::models::Recipe;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Catalog key of the recipe served on every fallback path
const DEFAULT_KEY: &str = "tomato_onion_chicken";

/// Pre-authored recipes for common ingredient combinations
static CATALOG: LazyLock<HashMap<&'static str, Recipe>> = LazyLock::new(|| {
    let mut catalog = HashMap::new();

    catalog.insert(
        DEFAULT_KEY,
        recipe(
            "Quick Chicken Cacciatore",
            &[
                "2 chicken breasts",
                "1 onion, diced",
                "2 tomatoes, chopped",
                "2 cloves garlic, minced",
                "1 tbsp olive oil",
                "1 tsp dried oregano",
                "Salt and pepper to taste",
            ],
            &[
                "Season chicken with salt and pepper.",
                "Heat olive oil in a skillet over medium heat.",
                "Cook chicken until browned on both sides, about 5 minutes per side.",
                "Add onions and garlic, cook until softened.",
                "Add tomatoes and oregano, simmer for 15 minutes until sauce thickens.",
                "Serve hot with pasta or rice.",
            ],
        ),
    );

    catalog.insert(
        "apple_cinnamon",
        recipe(
            "Simple Apple Crumble",
            &[
                "3 apples, peeled and sliced",
                "1/2 cup flour",
                "1/2 cup rolled oats",
                "1/4 cup brown sugar",
                "1/4 cup butter, cold and cubed",
                "1 tsp cinnamon",
                "1/4 tsp nutmeg",
                "Pinch of salt",
            ],
            &[
                "Preheat oven to 350°F (175°C).",
                "Place apple slices in a baking dish.",
                "Mix flour, oats, sugar, cinnamon, nutmeg, and salt in a bowl.",
                "Cut in butter until mixture resembles coarse crumbs.",
                "Sprinkle topping over apples.",
                "Bake for 35-40 minutes until golden and bubbly.",
                "Serve warm with ice cream if desired.",
            ],
        ),
    );

    catalog.insert(
        "pasta_tomato_cheese",
        recipe(
            "Quick Pasta Marinara",
            &[
                "8 oz pasta",
                "2 tomatoes, diced",
                "1/4 cup grated cheese",
                "2 cloves garlic, minced",
                "1 tbsp olive oil",
                "1 tsp dried basil",
                "Salt and pepper to taste",
            ],
            &[
                "Cook pasta according to package directions.",
                "In a separate pan, heat olive oil over medium heat.",
                "Add garlic and cook for 30 seconds until fragrant.",
                "Add tomatoes and basil, cook for 5-7 minutes.",
                "Drain pasta and add to the sauce.",
                "Top with cheese and serve immediately.",
            ],
        ),
    );

    catalog
});

/// Build one catalog entry from static parts
fn recipe(name: &str, ingredients: &[&str], instructions: &[&str]) -> Recipe {
    Recipe::new(
        name,
        ingredients.iter().copied().map(str::to_owned).collect(),
        instructions.iter().copied().map(str::to_owned).collect(),
    )
}

/// Look up a catalog entry by combination key
#[must_use]
pub fn lookup(key: &str) -> Option<Recipe> {
    CATALOG.get(key).cloned()
}

/// The recipe served on every fallback path
///
/// Always the `"tomato_onion_chicken"` entry; fallback selection never
/// derives a key from the requested ingredients.
#[must_use]
pub fn default_recipe() -> Recipe {
    lookup(DEFAULT_KEY).unwrap_or_else(Recipe::placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_recipe_is_the_cacciatore_entry() {
        let recipe = default_recipe();
        assert_eq!(recipe.name, "Quick Chicken Cacciatore");
        assert_eq!(recipe.ingredients.len(), 7);
        assert_eq!(recipe.instructions.len(), 6);
        assert_eq!(Some(recipe), lookup("tomato_onion_chicken"));
    }

    #[test]
    fn test_default_recipe_is_stable_across_calls() {
        assert_eq!(default_recipe(), default_recipe());
    }

    #[test]
    fn test_catalog_holds_all_three_combinations() {
        let crumble = lookup("apple_cinnamon").unwrap();
        assert_eq!(crumble.name, "Simple Apple Crumble");
        assert_eq!(crumble.ingredients.len(), 8);
        assert_eq!(crumble.instructions[0], "Preheat oven to 350°F (175°C).");

        let marinara = lookup("pasta_tomato_cheese").unwrap();
        assert_eq!(marinara.name, "Quick Pasta Marinara");
        assert_eq!(marinara.instructions.len(), 6);
    }

    #[test]
    fn test_unknown_key_returns_none() {
        assert!(lookup("beef_wellington").is_none());
    }
}
