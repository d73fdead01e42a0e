//! Error types for genai-core

use thiserror::Error;

/// Result type alias for genai-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Missing or invalid configuration, detected before any remote call
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Agent or runner initialization failed
    #[error("Agent initialization failed: {0}")]
    InitializationFailed(String),

    /// Agent processing failed
    #[error("Agent processing failed: {0}")]
    ProcessingFailed(String),

    /// Error from the model backend, passed through untouched
    #[error("{0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a model backend error
    pub fn model(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Model(Box::new(err))
    }

    /// Borrow the wrapped model error as a concrete type
    pub fn downcast_model_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Model(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}

impl From<genai_utils::ConfigError> for Error {
    fn from(err: genai_utils::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
