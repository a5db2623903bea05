// ABOUTME: Ordered ingredient collection with normalization and exact-match deduplication
// ABOUTME: Upholds the uniqueness and insertion-order invariants for all downstream consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Normalized ingredient sets
//!
//! An [`IngredientSet`] holds case-normalized ingredient names in insertion
//! order with exact string uniqueness. All constructors normalize their
//! input, so downstream code never sees untrimmed or mixed-case entries.

use serde::Serialize;
use std::fmt;
use std::slice::Iter;

/// Ingredients assumed when the upstream detector produced nothing
const DEFAULT_DETECTION: [&str; 4] = ["tomato", "onion", "chicken", "rice"];

/// An ordered sequence of unique, normalized ingredient names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IngredientSet {
    items: Vec<String>,
}

impl IngredientSet {
    /// Create an empty ingredient set
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a set from raw classifier labels
    ///
    /// Labels are trimmed and lowercased; empty labels and exact duplicates
    /// are dropped. Insertion order of the first occurrence is preserved.
    #[must_use]
    pub fn from_labels(labels: &[String]) -> Self {
        let mut set = Self::new();
        for label in labels {
            set.insert(label);
        }
        set
    }

    /// The detection set assumed when the upstream classifier found nothing
    #[must_use]
    pub fn default_detection() -> Self {
        let mut set = Self::new();
        for item in DEFAULT_DETECTION {
            set.insert(item);
        }
        set
    }

    /// Insert a label, normalizing it first
    ///
    /// Returns `true` when the normalized label was appended, `false` when it
    /// was empty or already present.
    pub fn insert(&mut self, label: &str) -> bool {
        let normalized = normalize(label);
        if normalized.is_empty() || self.items.contains(&normalized) {
            return false;
        }
        self.items.push(normalized);
        true
    }

    /// Check whether a label (after normalization) is present
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.items.contains(&normalize(label))
    }

    /// Number of ingredients in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no ingredients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the ingredients in insertion order
    pub fn iter(&self) -> Iter<'_, String> {
        self.items.iter()
    }

    /// View the ingredients as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl fmt::Display for IngredientSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.items.join(", "))
    }
}

impl<'a> IntoIterator for &'a IngredientSet {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Normalize one raw label: trim surrounding whitespace, lowercase
fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels_normalizes_and_dedups() {
        let labels = vec![
            "  Tomato ".to_owned(),
            "onion".to_owned(),
            "TOMATO".to_owned(),
            String::new(),
            "   ".to_owned(),
            "Chicken".to_owned(),
        ];

        let set = IngredientSet::from_labels(&labels);
        assert_eq!(set.as_slice(), ["tomato", "onion", "chicken"]);
    }

    #[test]
    fn test_insert_reports_whether_added() {
        let mut set = IngredientSet::new();
        assert!(set.insert("Garlic"));
        assert!(!set.insert("garlic"));
        assert!(!set.insert(" GARLIC "));
        assert!(!set.insert(""));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_contains_is_normalized() {
        let set = IngredientSet::from_labels(&["Basil".to_owned()]);
        assert!(set.contains("basil"));
        assert!(set.contains("  BASIL "));
        assert!(!set.contains("oregano"));
    }

    #[test]
    fn test_default_detection_contents() {
        let set = IngredientSet::default_detection();
        assert_eq!(set.as_slice(), ["tomato", "onion", "chicken", "rice"]);
    }

    #[test]
    fn test_display_joins_in_order() {
        let set = IngredientSet::from_labels(&["rice".to_owned(), "fish".to_owned()]);
        assert_eq!(set.to_string(), "rice, fish");
    }

    #[test]
    fn test_serializes_as_plain_sequence() {
        let set = IngredientSet::from_labels(&["salt".to_owned(), "pepper".to_owned()]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["salt","pepper"]"#);
    }
}
