//! Chat-completions models bound to a client

use crate::{
    CompletionRequest, CompletionResponse, LLMProvider, ModelProvider, Result,
    completion::CompletionRequestBuilder,
};
use std::fmt;
use std::sync::Arc;

/// A model name paired with the client that serves it
///
/// Cloning is cheap; clones share the same client.
#[derive(Clone)]
pub struct ChatCompletionsModel {
    model: String,
    client: Arc<dyn LLMProvider>,
}

impl ChatCompletionsModel {
    /// Bind a model name to a client
    pub fn new(model: impl Into<String>, client: Arc<dyn LLMProvider>) -> Self {
        Self {
            model: model.into(),
            client,
        }
    }

    /// Model name sent to the API
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Client this model runs on
    pub fn client(&self) -> &Arc<dyn LLMProvider> {
        &self.client
    }

    /// Start a request already targeting this model
    pub fn request(&self) -> CompletionRequestBuilder {
        CompletionRequest::builder(&self.model)
    }

    /// Send a request to this model
    ///
    /// The request's model field is overwritten with this model's name.
    pub async fn complete(&self, mut request: CompletionRequest) -> Result<CompletionResponse> {
        request.model.clone_from(&self.model);
        self.client.complete(request).await
    }
}

impl fmt::Debug for ChatCompletionsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionsModel")
            .field("model", &self.model)
            .field("client", &self.client.name())
            .finish()
    }
}

/// Model provider that binds every requested name to one client
#[derive(Clone)]
pub struct ClientModelProvider {
    client: Arc<dyn LLMProvider>,
}

impl ClientModelProvider {
    /// Create a provider over the given client
    pub fn new(client: Arc<dyn LLMProvider>) -> Self {
        Self { client }
    }
}

impl ModelProvider for ClientModelProvider {
    fn get_model(&self, name: &str) -> Result<ChatCompletionsModel> {
        Ok(ChatCompletionsModel::new(name, self.client.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Message, StopReason, TokenUsage};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProvider {
        seen: Mutex<Vec<CompletionRequest>>,
    }

    #[async_trait]
    impl LLMProvider for RecordingProvider {
        async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
            let model = request.model.clone();
            self.seen.lock().unwrap().push(request);
            Ok(CompletionResponse {
                message: Message::assistant(format!("from {model}")),
                stop_reason: StopReason::EndTurn,
                usage: TokenUsage::default(),
            })
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    #[test]
    fn test_complete_forces_model_name() {
        let client = Arc::new(RecordingProvider::default());
        let model = ChatCompletionsModel::new("gemini-2.0-flash", client.clone());

        let request = CompletionRequest::builder("something-else")
            .add_message(Message::user("hi"))
            .build();
        let response = tokio_test::block_on(model.complete(request)).unwrap();

        assert_eq!(response.message.text(), "from gemini-2.0-flash");
        assert_eq!(client.seen.lock().unwrap()[0].model, "gemini-2.0-flash");
    }

    #[test]
    fn test_client_model_provider_shares_client() {
        let client: Arc<dyn LLMProvider> = Arc::new(RecordingProvider::default());
        let provider = ClientModelProvider::new(client.clone());

        let model = provider.get_model("gemini-2.5-pro").unwrap();

        assert_eq!(model.model(), "gemini-2.5-pro");
        assert!(Arc::ptr_eq(model.client(), &client));
        assert_eq!(model.request().build().model, "gemini-2.5-pro");
    }

    #[test]
    fn test_debug_shows_client_name() {
        let model = ChatCompletionsModel::new("m", Arc::new(RecordingProvider::default()));
        let debug = format!("{model:?}");
        assert!(debug.contains("\"m\""));
        assert!(debug.contains("recording"));
    }
}
