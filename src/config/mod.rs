// ABOUTME: Configuration management module for centralized service settings and parameters
// ABOUTME: Handles environment-driven generation settings and runtime environment detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for RecipeSnap
//!
//! This module provides centralized configuration management for all components
//! of the recipe synthesis pipeline, including:
//!
//! - **Types**: Strongly typed environment and log level values
//! - **Environment**: Generation backend settings loaded from environment variables

/// Environment-driven service configuration
pub mod environment;
/// Strongly typed configuration primitives
pub mod types;

// Re-export main configuration types
pub use environment::{GenerationConfig, SnapConfig};
pub use types::{Environment, LogLevel};
