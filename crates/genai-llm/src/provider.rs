//! Provider traits
//!
//! [`LLMProvider`] is the client seam: one chat-completions call against one
//! endpoint. [`ModelProvider`] turns a bare model name into a
//! [`ChatCompletionsModel`] bound to some client.

use crate::{ChatCompletionsModel, CompletionRequest, CompletionResponse, Result};
use async_trait::async_trait;

/// Trait for LLM clients
///
/// Implementations send a completion request to a chat-completions service
/// (for example an OpenAI-compatible HTTP API).
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generate a completion from the LLM
    ///
    /// # Arguments
    ///
    /// * `request` - The completion request with messages and parameters
    ///
    /// # Returns
    ///
    /// The completion response with the assistant's message and metadata
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Get the provider name (e.g., "openai")
    fn name(&self) -> &str;
}

/// Resolves model names to concrete models
pub trait ModelProvider: Send + Sync {
    /// Look up the model with the given name
    fn get_model(&self, name: &str) -> Result<ChatCompletionsModel>;
}
