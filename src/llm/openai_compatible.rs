// ABOUTME: Generic OpenAI-compatible generation backend for local and cloud endpoints
// ABOUTME: Supports Ollama, vLLM, LocalAI, and any OpenAI-compatible chat completions API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Backend
//!
//! Generic implementation for any `OpenAI`-compatible inference endpoint.
//! This enables recipe generation against local servers like Ollama, vLLM,
//! and `LocalAI` without backend-specific code.
//!
//! ## Configuration
//!
//! Built from a [`GenerationConfig`], typically via environment variables:
//! - `RECIPESNAP_LLM_BASE_URL`: Base URL (default: <http://localhost:11434/v1> for Ollama)
//! - `RECIPESNAP_LLM_MODEL`: Model to use (default: `mistral:7b-instruct`)
//! - `RECIPESNAP_LLM_API_KEY`: API key (optional, empty for local servers)
//!
//! ## Supported Backends
//!
//! - **Ollama**: <http://localhost:11434/v1>
//! - **vLLM**: <http://localhost:8000/v1>
//! - **`LocalAI`**: <http://localhost:8080/v1>
//! - **Any `OpenAI`-compatible endpoint**
//!
//! ## Example
//!
//! ```rust,no_run
//! use recipesnap::errors::AppError;
//! use recipesnap::llm::{GenerationBackend, OpenAiCompatibleBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let backend = OpenAiCompatibleBackend::from_env()?;
//!     let completion = backend.generate("Suggest a soup recipe.").await?;
//!     println!("{completion}");
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::GenerationBackend;
use crate::config::GenerationConfig;
use crate::errors::{AppError, AppResult, ErrorCode};

// ============================================================================
// Configuration Constants
// ============================================================================

/// Connection timeout for local servers (more lenient than cloud)
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Request timeout (local inference can be slower)
const REQUEST_TIMEOUT_SECS: u64 = 300;

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// OpenAI-compatible API request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repetition_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

/// Message structure for OpenAI-compatible API
#[derive(Debug, Clone, Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

/// OpenAI-compatible API response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
}

/// Choice in response
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

/// Message in response
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

/// Usage statistics in response
#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Error response structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Backend Implementation
// ============================================================================

/// Generic `OpenAI`-compatible generation backend
///
/// Works with any endpoint that implements the `OpenAI` chat completions
/// API, including Ollama, vLLM, `LocalAI`, and cloud services. Sampling
/// options come from the [`GenerationConfig`] it was built with.
pub struct OpenAiCompatibleBackend {
    client: Client,
    config: GenerationConfig,
}

impl OpenAiCompatibleBackend {
    /// Create a new backend with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: GenerationConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a backend from environment variables
    ///
    /// Reads the `RECIPESNAP_LLM_*` variables via
    /// [`GenerationConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_env() -> AppResult<Self> {
        let config = GenerationConfig::from_env();

        info!(
            "Initializing generation backend: base_url={}, model={}",
            config.base_url, config.model
        );

        Self::new(config)
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// Identify the server behind the base URL from its conventional port
    fn detect_backend(base_url: &str) -> &'static str {
        if base_url.contains(":11434") {
            "ollama"
        } else if base_url.contains(":8000") {
            "vllm"
        } else if base_url.contains(":8080") {
            "localai"
        } else {
            "local"
        }
    }

    /// Parse error response from API
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 => AppError::external_auth(format!(
                    "API authentication failed: {}",
                    error_response.error.message
                )),
                429 => AppError::new(
                    ErrorCode::ExternalRateLimited,
                    format!("LLM rate limit reached: {}", error_response.error.message),
                ),
                400 => AppError::invalid_input(format!(
                    "API validation error: {}",
                    error_response.error.message
                )),
                404 => AppError::not_found(format!(
                    "Model or endpoint not found: {}",
                    error_response.error.message
                )),
                503 => AppError::external_unavailable(
                    "LocalLLM",
                    format!(
                        "Service unavailable (is the local server running?): {}",
                        error_response.error.message
                    ),
                ),
                _ => AppError::external_service(
                    "LocalLLM",
                    format!("{} - {}", error_type, error_response.error.message),
                ),
            }
        } else {
            // Non-JSON error responses are common with local servers
            match status.as_u16() {
                502..=504 => AppError::external_unavailable(
                    "LocalLLM",
                    "Local LLM server is not responding. Is Ollama/vLLM running?",
                ),
                _ => AppError::external_service(
                    "LocalLLM",
                    format!(
                        "API error ({}): {}",
                        status,
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            }
        }
    }

    /// Add authorization header if an API key is configured
    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }
}

#[async_trait]
impl GenerationBackend for OpenAiCompatibleBackend {
    fn name(&self) -> &'static str {
        Self::detect_backend(&self.config.base_url)
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    #[instrument(skip(self, prompt), fields(model = %self.config.model))]
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        debug!(
            "Sending completion request to {} ({} prompt chars)",
            self.name(),
            prompt.chars().count()
        );

        let openai_request = OpenAiRequest {
            model: self.config.model.clone(),
            messages: vec![OpenAiMessage {
                role: "user".to_owned(),
                content: prompt.to_owned(),
            }],
            temperature: Some(self.config.temperature),
            top_p: Some(self.config.top_p),
            max_tokens: Some(self.config.max_tokens),
            repetition_penalty: Some(self.config.repetition_penalty),
            stream: Some(false),
        };

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Content-Type", "application/json")
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {}: {e}", self.name());
                if e.is_connect() {
                    AppError::external_unavailable(
                        "LocalLLM",
                        format!(
                            "Cannot connect to {}. Is the server running at {}?",
                            self.name(),
                            self.config.base_url
                        ),
                    )
                } else {
                    AppError::external_service("LocalLLM", format!("Failed to connect: {e}"))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {e}");
            AppError::external_service("LocalLLM", format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Failed to parse API response: {e} - body: {}",
                body.chars().take(500).collect::<String>()
            );
            AppError::serialization(format!("Failed to parse completion response: {e}"))
        })?;

        if let Some(usage) = &openai_response.usage {
            debug!(
                prompt_tokens = usage.prompt,
                completion_tokens = usage.completion,
                total_tokens = usage.total,
                "Token usage reported by backend"
            );
        }

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service("LocalLLM", "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received response from {}: {} chars, finish_reason: {:?}",
            self.name(),
            content.chars().count(),
            choice.finish_reason
        );

        Ok(content)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> AppResult<bool> {
        debug!(
            "Performing {} health check at {}",
            self.name(),
            self.config.base_url
        );

        // The models endpoint is the cheapest universally supported check
        let http_request = self.client.get(self.api_url("models"));

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!("{} health check failed: {e}", self.name());
                if e.is_connect() {
                    AppError::external_unavailable(
                        "LocalLLM",
                        format!(
                            "Cannot connect to {}. Is the server running at {}?",
                            self.name(),
                            self.config.base_url
                        ),
                    )
                } else {
                    AppError::external_service("LocalLLM", format!("Health check failed: {e}"))
                }
            })?;

        let healthy = response.status().is_success();

        if healthy {
            debug!("{} health check passed", self.name());
        } else {
            warn!(
                "{} health check failed with status: {}",
                self.name(),
                response.status()
            );
        }

        Ok(healthy)
    }
}
