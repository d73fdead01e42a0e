//! Agent descriptors and model references

use genai_llm::ChatCompletionsModel;

/// Reference to the model an agent should run on
#[derive(Debug, Clone)]
pub enum ModelRef {
    /// A bare model name, resolved through a model provider at run time
    Named(String),

    /// A concrete model already bound to a client
    Model(ChatCompletionsModel),
}

impl ModelRef {
    /// Model name this reference points at
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Model(model) => model.model(),
        }
    }
}

impl From<ChatCompletionsModel> for ModelRef {
    fn from(model: ChatCompletionsModel) -> Self {
        Self::Model(model)
    }
}

impl From<&str> for ModelRef {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for ModelRef {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

/// Sampling settings applied to a model call
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelSettings {
    /// Sampling temperature
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    pub max_tokens: Option<usize>,
}

impl ModelSettings {
    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Layer `overrides` on top of these settings, field by field
    pub fn resolve(&self, overrides: Option<&ModelSettings>) -> ModelSettings {
        match overrides {
            None => *self,
            Some(o) => ModelSettings {
                temperature: o.temperature.or(self.temperature),
                max_tokens: o.max_tokens.or(self.max_tokens),
            },
        }
    }
}

/// A named bundle of instructions plus the model that executes them
///
/// Descriptors are built once and not mutated afterwards; the `with_*`
/// methods consume and return the descriptor.
///
/// # Example
///
/// ```
/// use genai_runtime::AgentDescriptor;
///
/// let agent = AgentDescriptor::new("Assistant", "You are a helpful assistant")
///     .with_model("gemini-2.0-flash");
///
/// assert_eq!(agent.name(), "Assistant");
/// assert_eq!(agent.model().map(|m| m.name()), Some("gemini-2.0-flash"));
/// ```
#[derive(Debug, Clone)]
pub struct AgentDescriptor {
    name: String,
    instructions: String,
    model: Option<ModelRef>,
    model_settings: ModelSettings,
}

impl AgentDescriptor {
    /// Create a descriptor without a model
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model: None,
            model_settings: ModelSettings::default(),
        }
    }

    /// Attach a model
    pub fn with_model(mut self, model: impl Into<ModelRef>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Attach sampling settings
    pub fn with_model_settings(mut self, settings: ModelSettings) -> Self {
        self.model_settings = settings;
        self
    }

    /// Agent name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Agent instructions (system prompt)
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Model attached to the agent, if any
    pub fn model(&self) -> Option<&ModelRef> {
        self.model.as_ref()
    }

    /// Agent-level sampling settings
    pub fn model_settings(&self) -> &ModelSettings {
        &self.model_settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use genai_llm::{CompletionRequest, CompletionResponse, LLMProvider};
    use std::sync::Arc;

    struct NullProvider;

    #[async_trait]
    impl LLMProvider for NullProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> genai_llm::Result<CompletionResponse> {
            Err(genai_llm::LLMError::RequestFailed("offline".to_string()))
        }

        fn name(&self) -> &str {
            "null"
        }
    }

    #[test]
    fn test_exact_name_and_instructions() {
        let instructions = "\n  You only respond in haikus.\n  ";
        let agent = AgentDescriptor::new("Gemini Agent", instructions);

        assert_eq!(agent.name(), "Gemini Agent");
        assert_eq!(agent.instructions(), instructions);
        assert!(agent.model().is_none());
        assert_eq!(agent.model_settings(), &ModelSettings::default());
    }

    #[test]
    fn test_model_attached_unchanged() {
        let client: Arc<dyn LLMProvider> = Arc::new(NullProvider);
        let model = ChatCompletionsModel::new("gemini-2.0-flash", client.clone());

        let agent = AgentDescriptor::new("Assistant", "help").with_model(model);

        match agent.model() {
            Some(ModelRef::Model(attached)) => {
                assert_eq!(attached.model(), "gemini-2.0-flash");
                assert!(Arc::ptr_eq(attached.client(), &client));
            }
            other => panic!("Expected concrete model, got {other:?}"),
        }
    }

    #[test]
    fn test_named_model() {
        let agent = AgentDescriptor::new("a", "b").with_model(String::from("gemini-2.5-pro"));
        assert!(matches!(agent.model(), Some(ModelRef::Named(n)) if n == "gemini-2.5-pro"));
    }

    #[test]
    fn test_settings_resolve() {
        let base = ModelSettings::default().with_temperature(0.7).with_max_tokens(512);
        let overrides = ModelSettings::default().with_max_tokens(64);

        let merged = base.resolve(Some(&overrides));
        assert_eq!(merged.temperature, Some(0.7));
        assert_eq!(merged.max_tokens, Some(64));

        assert_eq!(base.resolve(None), base);
    }
}
