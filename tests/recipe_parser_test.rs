// ABOUTME: Integration tests for the recipe text parser over realistic generation output
// ABOUTME: Validates name extraction, section routing, and totality on messy completions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Parser Tests
//!
//! Feeds the parser whole completions in the shapes instruction-tuned
//! models actually produce: chatty preambles, markdown headers, mixed
//! bullet styles, and trailing chatter after the timing lines.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipesnap::recipes::parser::parse;
use recipesnap::recipes::Recipe;

const VERBOSE_COMPLETION: &str = "Here's a dish I love.

Mediterranean Chicken Skillet

A bright weeknight dinner that comes together in one pan.

## Ingredients:
- 2 chicken breasts
- 1 tbsp olive oil
- 3 cloves garlic
- fresh basil
* 2 tomatoes, diced

## Instructions:
1. Season the chicken on both sides.
2. Sear in olive oil until golden.
3) Add garlic and tomatoes.
4. Simmer gently.

Preparation time: 15 minutes
Cooking time: 25 minutes

Enjoy!
";

#[test]
fn test_verbose_completion_parses_into_all_fields() {
    let recipe = parse(VERBOSE_COMPLETION);

    assert_eq!(recipe.name, "Mediterranean Chicken Skillet");
    assert_eq!(
        recipe.ingredients,
        [
            "2 chicken breasts",
            "1 tbsp olive oil",
            "3 cloves garlic",
            "2 tomatoes, diced",
        ]
    );
    assert_eq!(
        recipe.instructions,
        [
            "Season the chicken on both sides.",
            "Sear in olive oil until golden.",
            "Add garlic and tomatoes.",
            "Simmer gently.",
        ]
    );
}

#[test]
fn test_quantity_free_ingredient_lines_are_dropped() {
    let recipe = parse(VERBOSE_COMPLETION);
    assert!(!recipe.ingredients.iter().any(|i| i.contains("basil")));
}

#[test]
fn test_trailing_chatter_after_timing_lines_is_ignored() {
    let recipe = parse(VERBOSE_COMPLETION);
    assert!(!recipe.instructions.iter().any(|s| s.contains("Enjoy")));
}

#[test]
fn test_repeated_ingredient_headers_accumulate() {
    let raw = "Tomato Rice\n\nIngredients:\n- 2 cups rice\n\nInstructions:\n1. Cook rice.\n\nMore ingredient ideas:\n- 1 lime\n";
    let recipe = parse(raw);

    assert_eq!(recipe.ingredients, ["2 cups rice", "1 lime"]);
    assert_eq!(recipe.instructions, ["Cook rice."]);
}

#[test]
fn test_headers_reopen_sections_after_timing_close() {
    let raw = "Braised Stew\nInstructions:\n1. Brown the meat.\nPreparation time: 20 minutes\nInstructions:\n2. Deglaze and braise.\n";
    let recipe = parse(raw);

    assert_eq!(
        recipe.instructions,
        ["Brown the meat.", "Deglaze and braise."]
    );
}

#[test]
fn test_crlf_completions_parse_cleanly() {
    let raw = "Omelette\r\nIngredients:\r\n- 2 eggs\r\nInstructions:\r\n1. Whisk and fry.\r\n";
    let recipe = parse(raw);

    assert_eq!(recipe.name, "Omelette");
    assert_eq!(recipe.ingredients, ["2 eggs"]);
    assert_eq!(recipe.instructions, ["Whisk and fry."]);
}

#[test]
fn test_nameless_output_yields_the_placeholder() {
    let nameless = [
        "",
        "\n\n",
        "Recipe coming right up\nhere it is\n",
        "# Header Only\n## Another Header\n",
    ];

    for raw in nameless {
        assert_eq!(parse(raw), Recipe::placeholder(), "input: {raw:?}");
    }
}

#[test]
fn test_any_input_yields_a_complete_recipe() {
    let garbage = [
        "::::",
        "1. ",
        "Ingredients:",
        "\u{0}\u{1}\u{2}",
        "name\nIngredients:\n- \u{1f345} 1 tomato",
    ];

    for raw in garbage {
        // Totality: serialization always produces the three-field object
        let recipe = parse(raw);
        let value = serde_json::to_value(&recipe).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3, "input: {raw:?}");
        assert!(object.contains_key("name"));
        assert!(object.contains_key("ingredients"));
        assert!(object.contains_key("instructions"));
    }
}
