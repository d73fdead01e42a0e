//! Environment-backed API configuration
//!
//! Everything needed to reach the chat-completions endpoint is collected
//! into one [`ApiConfig`] value that callers pass around explicitly.

use thiserror::Error;

/// Environment variable holding the API credential (required)
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable overriding the API base URL
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";
/// Environment variable overriding the model name
pub const MODEL_VAR: &str = "GEMINI_MODEL";
/// Environment variable overriding the request timeout (seconds)
pub const TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";

/// OpenAI-compatible endpoint of the Gemini API
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";
/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Errors raised while reading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent or blank
    #[error("{name} is not set. Please ensure it is defined in your .env file.")]
    MissingVar {
        /// Variable name
        name: String,
    },

    /// A variable is present but cannot be parsed
    #[error("{name} has an invalid value '{value}': {reason}")]
    InvalidVar {
        /// Variable name
        name: String,
        /// Raw value found
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Result type alias for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Connection settings for the remote chat-completions API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API
    pub api_base: String,
    /// Model name requested from the API
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a config with the given key and default endpoint settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read configuration from the process environment
    ///
    /// Fails with [`ConfigError::MissingVar`] when `GEMINI_API_KEY` is
    /// absent or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    ///
    /// Blank values are treated the same as absent ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_VAR).ok_or_else(|| ConfigError::MissingVar {
            name: API_KEY_VAR.to_string(),
        })?;

        let mut config = Self::new(api_key);

        if let Some(api_base) = get(API_BASE_VAR) {
            config.api_base = api_base;
        }
        if let Some(model) = get(MODEL_VAR) {
            config.model = model;
        }
        if let Some(raw) = get(TIMEOUT_VAR) {
            config.timeout_secs = raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidVar {
                    name: TIMEOUT_VAR.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        tracing::debug!(
            api_base = %config.api_base,
            model = %config.model,
            timeout_secs = config.timeout_secs,
            "Loaded API configuration"
        );

        Ok(config)
    }

    /// Override the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_missing_key() {
        let err = ApiConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVar {
                name: API_KEY_VAR.to_string()
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("GEMINI_API_KEY"));
        assert!(msg.contains("is not set"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let result = ApiConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")]));
        assert!(matches!(result, Err(ConfigError::MissingVar { .. })));
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "key-123")])).unwrap();
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "key-123"),
            (API_BASE_VAR, "http://localhost:8080/v1"),
            (MODEL_VAR, "gemini-2.5-pro"),
            (TIMEOUT_VAR, "30"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "http://localhost:8080/v1");
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_timeout() {
        let result = ApiConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "key-123"),
            (TIMEOUT_VAR, "soon"),
        ]));
        match result {
            Err(ConfigError::InvalidVar { name, value, .. }) => {
                assert_eq!(name, TIMEOUT_VAR);
                assert_eq!(value, "soon");
            }
            other => panic!("Expected InvalidVar, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_overrides() {
        let config = ApiConfig::new("k")
            .with_api_base("http://127.0.0.1:1/v1")
            .with_model("m")
            .with_timeout(5);
        assert_eq!(config.api_base, "http://127.0.0.1:1/v1");
        assert_eq!(config.model, "m");
        assert_eq!(config.timeout_secs, 5);
    }
}
