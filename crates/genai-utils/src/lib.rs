//! Shared utilities for genai-agents
//!
//! This crate provides the pieces every other crate and the CLI lean on:
//! tracing setup and the environment-backed API configuration.

pub mod config;
pub mod logging;

pub use config::{ApiConfig, ConfigError};
pub use logging::init_tracing;
