// ABOUTME: State-machine parser that recovers structured recipes from raw generation text
// ABOUTME: Extracts the name line and accumulates ingredient and instruction sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe text parsing
//!
//! Generation backends produce loosely structured prose. This parser trades
//! precision for robustness: it scans for a plausible name line, then walks
//! the text with a small state machine keyed on section headers, keeping
//! digit-bearing ingredient lines and de-numbered instruction lines. It is
//! total: any input, however malformed, yields a [`Recipe`].

use crate::recipes::models::Recipe;

/// Heuristic cutoff below which a colon-bearing line is treated as metadata
const METADATA_LINE_MAX_CHARS: usize = 20;

/// Position of the scan relative to the recognized sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// No section header seen yet
    Seeking,
    /// Inside an ingredients block
    InIngredients,
    /// Inside an instructions block
    InInstructions,
    /// A timing line ended both sections
    Closed,
}

/// What the state machine decided to do with one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineAction {
    /// Header, metadata, or out-of-section text; nothing accumulated
    Discard,
    /// Accumulate as an ingredient candidate
    Ingredient,
    /// Accumulate as an instruction step
    Instruction,
}

/// Parse raw generation text into a structured recipe
///
/// Never fails: when no plausible name line exists the generic placeholder
/// recipe is returned instead.
#[must_use]
pub fn parse(raw: &str) -> Recipe {
    let Some(name) = extract_name(raw) else {
        return Recipe::placeholder();
    };

    let mut state = ParseState::Seeking;
    let mut ingredients = Vec::new();
    let mut instructions = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        let (next_state, action) = transition(state, trimmed);
        state = next_state;

        match action {
            LineAction::Discard => {}
            LineAction::Ingredient => {
                let item = strip_bullet(trimmed);
                // Digit content is the proxy for "has a quantity"
                if item.chars().any(|c| c.is_ascii_digit()) {
                    ingredients.push(item.to_owned());
                }
            }
            LineAction::Instruction => {
                instructions.push(strip_numbering(strip_bullet(trimmed)).to_owned());
            }
        }
    }

    Recipe::new(name, ingredients, instructions)
}

/// Find the recipe name: the first non-blank line that is not a preamble
///
/// Lines opening with `recipe`, `here`, or `#` are treated as boilerplate
/// lead-ins rather than names.
fn extract_name(raw: &str) -> Option<String> {
    raw.lines().find_map(|line| {
        if line.trim().is_empty() {
            return None;
        }
        let lower = line.to_lowercase();
        if lower.starts_with("recipe") || lower.starts_with("here") || lower.starts_with('#') {
            return None;
        }
        Some(line.trim().trim_matches('#').trim().to_owned())
    })
}

/// Pure per-line transition for the section state machine
///
/// Header and timing checks run before the metadata filter so short header
/// lines like `Ingredients:` still switch sections. Headers re-open sections
/// from any state, including `Closed`.
fn transition(state: ParseState, line: &str) -> (ParseState, LineAction) {
    let lower = line.to_lowercase();

    if lower.contains("ingredient") && has_header_punctuation(line) {
        return (ParseState::InIngredients, LineAction::Discard);
    }
    if lower.contains("instruction") && has_header_punctuation(line) {
        return (ParseState::InInstructions, LineAction::Discard);
    }
    if lower.contains("preparation time") || lower.contains("cooking time") {
        return (ParseState::Closed, LineAction::Discard);
    }

    if is_noise(line) {
        return (state, LineAction::Discard);
    }

    match state {
        ParseState::InIngredients => (state, LineAction::Ingredient),
        ParseState::InInstructions => (state, LineAction::Instruction),
        ParseState::Seeking | ParseState::Closed => (state, LineAction::Discard),
    }
}

/// Punctuation that marks a section-header line
fn has_header_punctuation(line: &str) -> bool {
    line.contains(':') || line.contains('-') || line.contains('#')
}

/// Blank lines, markdown headers, and short colon-bearing metadata lines
fn is_noise(line: &str) -> bool {
    line.is_empty()
        || line.starts_with('#')
        || (line.contains(':') && line.chars().count() < METADATA_LINE_MAX_CHARS)
}

/// Strip a single leading `-` or `*` bullet marker and following whitespace
fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(['-', '*']).map_or(line, str::trim)
}

/// Strip a `1.` or `1)` numbering prefix and following whitespace
///
/// Only a single digit directly followed by the punctuation counts, so
/// `10. Simmer` is kept verbatim.
fn strip_numbering(line: &str) -> &str {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second))
            if first.is_ascii_digit() && (second == '.' || second == ')') =>
        {
            chars.as_str().trim_start()
        }
        _ => line,
    }
}
