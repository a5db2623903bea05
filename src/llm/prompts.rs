// ABOUTME: Instruction-format prompt rendering for recipe generation requests
// ABOUTME: Builds the cooking-assistant prompt and strips instruction framing from completions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Prompts
//!
//! Renders the cooking-assistant prompt in the `[INST]`-delimited
//! instruction format that Mistral-family models are tuned on, and extracts
//! the model's completion from raw output that may echo the prompt back.

use crate::ingredients::IngredientSet;

/// Closing tag of the instruction block in the prompt format
const INSTRUCTION_CLOSE_TAG: &str = "[/INST]";

/// Render the generation prompt for a set of ingredients
///
/// Deterministic: the same set always renders to a byte-identical prompt.
/// Ingredients are joined with `", "` in iteration order.
#[must_use]
pub fn build_recipe_prompt(ingredients: &IngredientSet) -> String {
    format!(
        "<s>[INST] You are a helpful cooking assistant. \
         Create a delicious recipe using all or some of these ingredients: {ingredients}.\n\
         \n\
         Please provide:\n\
         1. A creative recipe name\n\
         2. List of ingredients with measurements\n\
         3. Step-by-step cooking instructions\n\
         4. A brief description of the dish\n\
         5. Preparation time and cooking time\n\
         \n\
         Keep the recipe practical and make it taste great! [/INST]"
    )
}

/// Extract the completion from raw model output
///
/// Instruction-tuned models frequently echo the prompt before the answer,
/// so everything up to and including the last `[/INST]` is discarded. Raw
/// output without the tag is returned whole. The result is trimmed.
#[must_use]
pub fn extract_completion(raw: &str) -> &str {
    raw.rfind(INSTRUCTION_CLOSE_TAG)
        .map_or(raw, |idx| &raw[idx + INSTRUCTION_CLOSE_TAG.len()..])
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_byte_identical_across_calls() {
        let ingredients =
            IngredientSet::from_labels(&["tomato".to_owned(), "onion".to_owned()]);
        assert_eq!(
            build_recipe_prompt(&ingredients),
            build_recipe_prompt(&ingredients)
        );
    }

    #[test]
    fn test_prompt_interpolates_joined_ingredients() {
        let ingredients =
            IngredientSet::from_labels(&["tomato".to_owned(), "onion".to_owned()]);
        let prompt = build_recipe_prompt(&ingredients);
        assert!(prompt.contains("ingredients: tomato, onion."));
        assert!(prompt.starts_with("<s>[INST] You are a helpful cooking assistant."));
        assert!(prompt.ends_with("Keep the recipe practical and make it taste great! [/INST]"));
    }

    #[test]
    fn test_extract_completion_takes_text_after_last_tag() {
        let raw = "<s>[INST] prompt [/INST] first [/INST]  Recipe: Soup\n";
        assert_eq!(extract_completion(raw), "Recipe: Soup");
    }

    #[test]
    fn test_extract_completion_without_tag_returns_trimmed_input() {
        assert_eq!(extract_completion("  Recipe: Soup "), "Recipe: Soup");
        assert_eq!(extract_completion(""), "");
    }

    #[test]
    fn test_extract_completion_with_trailing_tag_is_empty() {
        assert_eq!(extract_completion("prompt [/INST]"), "");
    }
}
