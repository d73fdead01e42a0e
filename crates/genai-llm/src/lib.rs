//! LLM provider abstraction layer for genai-agents
//!
//! This crate provides provider-agnostic abstractions for talking to a
//! chat-completions model. It includes:
//!
//! - Message types for LLM communication
//! - Completion request/response types
//! - The `LLMProvider` client trait and the `ModelProvider` lookup trait
//! - `ChatCompletionsModel`, a model name bound to a client
//! - An OpenAI-compatible HTTP client (behind the `openai` feature)

pub mod completion;
pub mod error;
pub mod messages;
pub mod model;
pub mod provider;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LLMError, Result};
pub use messages::{Message, Role};
pub use model::{ChatCompletionsModel, ClientModelProvider};
pub use provider::{LLMProvider, ModelProvider};

// Provider implementations (feature-gated)
#[cfg(feature = "openai")]
pub mod providers;
