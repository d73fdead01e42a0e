//! Simple agent implementation (one model call, no tools)

use crate::ModelSettings;
use async_trait::async_trait;
use genai_core::context::keys;
use genai_core::{Agent, Context, Error, Result};
use genai_llm::{ChatCompletionsModel, Message};
use serde_json::json;
use tracing::debug;

/// An agent bound to a concrete model
///
/// Each call to [`Agent::process`] sends the instructions as the system
/// prompt and the input as a single user message, then returns the
/// model's text. The resolved model name and token usage are recorded in
/// the run [`Context`].
pub struct SimpleAgent {
    name: String,
    instructions: String,
    model: ChatCompletionsModel,
    settings: ModelSettings,
}

impl SimpleAgent {
    /// Create a new simple agent
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        model: ChatCompletionsModel,
        settings: ModelSettings,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model,
            settings,
        }
    }

    /// Model this agent runs on
    pub fn model(&self) -> &ChatCompletionsModel {
        &self.model
    }
}

#[async_trait]
impl Agent for SimpleAgent {
    async fn process(&self, input: String, context: &mut Context) -> Result<String> {
        let request = self
            .model
            .request()
            .system(self.instructions.clone())
            .add_message(Message::user(input))
            .max_tokens(self.settings.max_tokens)
            .temperature(self.settings.temperature)
            .build();

        let response = self.model.complete(request).await.map_err(Error::model)?;

        debug!(
            agent = %self.name,
            stop_reason = ?response.stop_reason,
            "Model call finished"
        );

        context.insert(keys::MODEL, json!(self.model.model()));
        context.insert(keys::INPUT_TOKENS, json!(response.usage.input_tokens));
        context.insert(keys::OUTPUT_TOKENS, json!(response.usage.output_tokens));

        Ok(response.message.content)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
