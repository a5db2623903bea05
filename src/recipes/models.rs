// ABOUTME: Data models for synthesized recipes exchanged across the pipeline boundary
// ABOUTME: Defines the Recipe structure and its generic placeholder used on ambiguous parses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A structured recipe produced by the synthesis pipeline
///
/// Serializes to a JSON object with exactly the `name`, `ingredients`, and
/// `instructions` keys. All three fields are always present; the sequences
/// may be empty but are never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name of the dish
    pub name: String,
    /// Ingredient lines, with measurements where the source provided them
    pub ingredients: Vec<String>,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Create a recipe from its parts
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<String>,
        instructions: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients,
            instructions,
        }
    }

    /// The generic placeholder returned when a completion yields no usable name
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: "Simple Recipe".to_owned(),
            ingredients: vec![
                "Ingredient 1".to_owned(),
                "Ingredient 2".to_owned(),
                "Ingredient 3".to_owned(),
            ],
            instructions: vec![
                "Step 1: Cook ingredients".to_owned(),
                "Step 2: Serve and enjoy".to_owned(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_serializes_with_exactly_three_keys() {
        let recipe = Recipe::new(
            "Test Dish",
            vec!["1 egg".to_owned()],
            vec!["Cook it.".to_owned()],
        );

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Test Dish",
                "ingredients": ["1 egg"],
                "instructions": ["Cook it."]
            })
        );

        let Value::Object(map) = value else {
            panic!("expected object");
        };
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_empty_sequences_serialize_as_arrays() {
        let recipe = Recipe::new("Bare", Vec::new(), Vec::new());
        let json = serde_json::to_string(&recipe).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Bare","ingredients":[],"instructions":[]}"#
        );
    }

    #[test]
    fn test_placeholder_contents() {
        let placeholder = Recipe::placeholder();
        assert_eq!(placeholder.name, "Simple Recipe");
        assert_eq!(
            placeholder.ingredients,
            ["Ingredient 1", "Ingredient 2", "Ingredient 3"]
        );
        assert_eq!(
            placeholder.instructions,
            ["Step 1: Cook ingredients", "Step 2: Serve and enjoy"]
        );
    }

    #[test]
    fn test_round_trips_through_json() {
        let recipe = Recipe::placeholder();
        let json = serde_json::to_string(&recipe).unwrap();
        let parsed: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, recipe);
    }
}
