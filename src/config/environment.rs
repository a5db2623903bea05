// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, generation backend settings, and runtime parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for the recipe synthesis service

use crate::config::types::Environment;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{info, warn};

// ============================================================================
// Environment Variable Names
// ============================================================================

/// Environment variable toggling the generation backend
const ENV_GENERATION_ENABLED: &str = "RECIPESNAP_GENERATION_ENABLED";

/// Environment variable for the generation backend base URL
const ENV_LLM_BASE_URL: &str = "RECIPESNAP_LLM_BASE_URL";

/// Environment variable for the generation model name
const ENV_LLM_MODEL: &str = "RECIPESNAP_LLM_MODEL";

/// Environment variable for the generation API key (optional)
const ENV_LLM_API_KEY: &str = "RECIPESNAP_LLM_API_KEY";

/// Environment variable for the sampling temperature
const ENV_LLM_TEMPERATURE: &str = "RECIPESNAP_LLM_TEMPERATURE";

/// Environment variable for the completion token limit
const ENV_LLM_MAX_TOKENS: &str = "RECIPESNAP_LLM_MAX_TOKENS";

/// Environment variable naming the runtime environment
const ENV_ENVIRONMENT: &str = "ENVIRONMENT";

// ============================================================================
// Defaults
// ============================================================================

/// Default base URL (Ollama's OpenAI-compatible endpoint)
const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

/// Default model for local inference; the recipe prompt uses its instruct template
const DEFAULT_MODEL: &str = "mistral:7b-instruct";

/// Default sampling temperature
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default nucleus sampling cutoff
const DEFAULT_TOP_P: f32 = 0.9;

/// Default completion token limit
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Default repetition penalty
const DEFAULT_REPETITION_PENALTY: f32 = 1.1;

// ============================================================================
// Configuration Types
// ============================================================================

/// Settings for the recipe generation backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Whether a generation backend should be constructed at startup
    pub enabled: bool,
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: String,
    /// Model identifier sent with each request
    pub model: String,
    /// API key (optional for local servers)
    pub api_key: Option<String>,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Maximum tokens to generate per completion
    pub max_tokens: u32,
    /// Repetition penalty applied during sampling
    pub repetition_penalty: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: None,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_tokens: DEFAULT_MAX_TOKENS,
            repetition_penalty: DEFAULT_REPETITION_PENALTY,
        }
    }
}

impl GenerationConfig {
    /// Load generation settings from environment variables
    ///
    /// Missing variables use defaults; invalid numeric values fall back to
    /// defaults with a warning instead of failing startup.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            enabled: parse_env_or(ENV_GENERATION_ENABLED, true),
            base_url: env_var_or(ENV_LLM_BASE_URL, DEFAULT_BASE_URL),
            model: env_var_or(ENV_LLM_MODEL, DEFAULT_MODEL),
            api_key: env::var(ENV_LLM_API_KEY).ok().filter(|k| !k.is_empty()),
            temperature: parse_env_or(ENV_LLM_TEMPERATURE, DEFAULT_TEMPERATURE),
            top_p: DEFAULT_TOP_P,
            max_tokens: parse_env_or(ENV_LLM_MAX_TOKENS, DEFAULT_MAX_TOKENS),
            repetition_penalty: DEFAULT_REPETITION_PENALTY,
        }
    }
}

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Generation backend settings
    pub generation: GenerationConfig,
    /// Runtime environment
    pub environment: Environment,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            environment: Environment::Development,
        }
    }
}

impl SnapConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        info!("Loading configuration from environment variables");

        let config = Self {
            generation: GenerationConfig::from_env(),
            environment: Environment::from_str_or_default(&env_var_or(
                ENV_ENVIRONMENT,
                "development",
            )),
        };

        info!("Configuration loaded successfully");
        config
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a config error when the generation backend is enabled but its
    /// endpoint settings are unusable.
    pub fn validate(&self) -> AppResult<()> {
        if self.generation.enabled {
            if self.generation.base_url.trim().is_empty() {
                return Err(AppError::config(format!(
                    "{ENV_LLM_BASE_URL} must not be empty when generation is enabled"
                )));
            }
            if self.generation.model.trim().is_empty() {
                return Err(AppError::config(format!(
                    "{ENV_LLM_MODEL} must not be empty when generation is enabled"
                )));
            }
        }

        if !(0.0..=2.0).contains(&self.generation.temperature) {
            warn!(
                "Sampling temperature {} is outside the usual 0.0-2.0 range",
                self.generation.temperature
            );
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "RecipeSnap Configuration:\n\
             - Environment: {}\n\
             - Generation: {}\n\
             - Backend URL: {}\n\
             - Model: {}\n\
             - API Key: {}\n\
             - Temperature: {}\n\
             - Max Tokens: {}",
            self.environment,
            if self.generation.enabled {
                "Enabled"
            } else {
                "Disabled"
            },
            self.generation.base_url,
            self.generation.model,
            if self.generation.api_key.is_some() {
                "Configured"
            } else {
                "Not set"
            },
            self.generation.temperature,
            self.generation.max_tokens
        )
    }
}

// ============================================================================
// Parsing Helpers
// ============================================================================

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse environment variable or fall back to the default with a warning
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
{
    env::var(key).map_or(default, |raw| {
        raw.parse().unwrap_or_else(|_| {
            warn!("Invalid value {raw:?} for {key}, using default {default}");
            default
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults() {
        let config = GenerationConfig::default();
        assert!(config.enabled);
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.model, "mistral:7b-instruct");
        assert!(config.api_key.is_none());
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert!((config.top_p - 0.9).abs() < f32::EPSILON);
        assert_eq!(config.max_tokens, 1024);
        assert!((config.repetition_penalty - 1.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_default_config_validates() {
        let config = SnapConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_backend_url() {
        let mut config = SnapConfig {
            generation: GenerationConfig {
                base_url: "  ".to_owned(),
                ..GenerationConfig::default()
            },
            ..SnapConfig::default()
        };
        assert!(config.validate().is_err());

        // Disabled generation skips endpoint checks
        config.generation.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_model() {
        let config = SnapConfig {
            generation: GenerationConfig {
                model: String::new(),
                ..GenerationConfig::default()
            },
            ..SnapConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary_hides_api_key() {
        let config = SnapConfig {
            generation: GenerationConfig {
                api_key: Some("secret-token".to_owned()),
                ..GenerationConfig::default()
            },
            ..SnapConfig::default()
        };

        let summary = config.summary();
        assert!(summary.contains("Configured"));
        assert!(!summary.contains("secret-token"));
    }
}
