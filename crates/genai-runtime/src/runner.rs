//! Runner for dispatching prompts to agents
//!
//! The runner owns no process-wide state. Everything a call needs comes in
//! through the [`Runner`] itself (runner-level defaults), the
//! [`AgentDescriptor`] (agent-level model and settings) and an optional
//! [`RunConfig`] (run-level overrides).

use crate::{AgentDescriptor, ModelRef, RunResult, SimpleAgent};
use genai_core::context::keys;
use genai_core::{Agent, Context, Error, Result};
use genai_llm::{ChatCompletionsModel, ModelProvider, TokenUsage};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Workflow name used when a run does not set one
pub const DEFAULT_WORKFLOW_NAME: &str = "Agent workflow";

/// Call-time options layered on top of agent defaults
///
/// # Example
///
/// ```
/// use genai_runtime::RunConfig;
///
/// let config = RunConfig::new()
///     .with_model("gemini-2.0-flash")
///     .with_tracing_disabled(true);
///
/// assert!(config.tracing_disabled);
/// ```
#[derive(Clone)]
pub struct RunConfig {
    /// Model to use instead of the agent's own
    pub model: Option<ModelRef>,

    /// Provider used to resolve named models for this run
    pub model_provider: Option<Arc<dyn ModelProvider>>,

    /// Suppress run-level trace events
    pub tracing_disabled: bool,

    /// Name recorded on the run's trace events
    pub workflow_name: String,

    /// Settings overriding the agent's, field by field
    pub model_settings: Option<crate::ModelSettings>,
}

impl RunConfig {
    /// Create an empty run configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the agent's model
    pub fn with_model(mut self, model: impl Into<ModelRef>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the provider used to resolve named models
    pub fn with_model_provider(mut self, provider: Arc<dyn ModelProvider>) -> Self {
        self.model_provider = Some(provider);
        self
    }

    /// Disable or enable run-level tracing
    pub fn with_tracing_disabled(mut self, disabled: bool) -> Self {
        self.tracing_disabled = disabled;
        self
    }

    /// Set the workflow name
    pub fn with_workflow_name(mut self, name: impl Into<String>) -> Self {
        self.workflow_name = name.into();
        self
    }

    /// Override sampling settings
    pub fn with_model_settings(mut self, settings: crate::ModelSettings) -> Self {
        self.model_settings = Some(settings);
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            model: None,
            model_provider: None,
            tracing_disabled: false,
            workflow_name: DEFAULT_WORKFLOW_NAME.to_string(),
            model_settings: None,
        }
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("model", &self.model)
            .field("model_provider", &self.model_provider.is_some())
            .field("tracing_disabled", &self.tracing_disabled)
            .field("workflow_name", &self.workflow_name)
            .field("model_settings", &self.model_settings)
            .finish()
    }
}

/// Dispatches prompts to agents
///
/// # Example
///
/// ```no_run
/// use genai_llm::providers::OpenAIProvider;
/// use genai_llm::ChatCompletionsModel;
/// use genai_runtime::{AgentDescriptor, RunConfig, Runner};
/// use std::sync::Arc;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Arc::new(OpenAIProvider::new("key")?);
/// let model = ChatCompletionsModel::new("gemini-2.0-flash", client);
/// let agent = AgentDescriptor::new("Assistant", "You are a helpful assistant").with_model(model);
///
/// let result = Runner::new().run_sync(&agent, "Hello", &RunConfig::default())?;
/// println!("{}", result.final_output);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Runner {
    default_provider: Option<Arc<dyn ModelProvider>>,
    default_model: Option<String>,
    tracing_disabled: bool,
}

impl Runner {
    /// Create a runner with no defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new runner builder
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    /// Model name used when neither the run nor the agent sets one
    pub fn default_model(&self) -> Option<&str> {
        self.default_model.as_deref()
    }

    /// Whether tracing is disabled for every run of this runner
    pub fn tracing_disabled(&self) -> bool {
        self.tracing_disabled
    }

    /// Dispatch `input` to `agent` and await the model's answer
    ///
    /// Configuration problems (no model, no provider for a named model) are
    /// reported before any request is sent. Errors from the model backend
    /// are returned as [`Error::Model`] without modification.
    pub async fn run(
        &self,
        agent: &AgentDescriptor,
        input: impl Into<String>,
        config: &RunConfig,
    ) -> Result<RunResult> {
        let input = input.into();
        let model = self.resolve_model(agent, config)?;
        let settings = agent
            .model_settings()
            .resolve(config.model_settings.as_ref());
        let tracing_enabled = !(self.tracing_disabled || config.tracing_disabled);

        let mut context = Context::new(config.workflow_name.clone()).with_tracing(tracing_enabled);

        if context.tracing_enabled() {
            info!(
                workflow = %context.workflow_name(),
                agent = %agent.name(),
                model = %model.model(),
                "Agent run started"
            );
        } else {
            debug!(agent = %agent.name(), model = %model.model(), "Agent run started");
        }

        let runnable = SimpleAgent::new(agent.name(), agent.instructions(), model, settings);
        let final_output = runnable.process(input, &mut context).await?;

        let usage = TokenUsage {
            input_tokens: context.get_u64(keys::INPUT_TOKENS).unwrap_or(0) as usize,
            output_tokens: context.get_u64(keys::OUTPUT_TOKENS).unwrap_or(0) as usize,
        };

        if context.tracing_enabled() {
            info!(
                workflow = %context.workflow_name(),
                agent = %agent.name(),
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Agent run finished"
            );
        } else {
            debug!(agent = %agent.name(), tokens = usage.total(), "Agent run finished");
        }

        Ok(RunResult {
            final_output,
            last_agent: runnable.name().to_string(),
            model: runnable.model().model().to_string(),
            usage,
        })
    }

    /// Blocking variant of [`Runner::run`]
    ///
    /// Drives the call on a private current-thread runtime. Must not be
    /// called from inside an async runtime; use [`Runner::run`] there.
    pub fn run_sync(
        &self,
        agent: &AgentDescriptor,
        input: impl Into<String>,
        config: &RunConfig,
    ) -> Result<RunResult> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(Error::InitializationFailed(
                "run_sync cannot be called from within an async runtime; use Runner::run instead"
                    .to_string(),
            ));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::InitializationFailed(format!("failed to start runtime: {e}")))?;

        runtime.block_on(self.run(agent, input, config))
    }

    /// Pick the model for a run: run config, then agent, then runner default
    fn resolve_model(
        &self,
        agent: &AgentDescriptor,
        config: &RunConfig,
    ) -> Result<ChatCompletionsModel> {
        let model_ref = config
            .model
            .as_ref()
            .or(agent.model())
            .cloned()
            .or_else(|| self.default_model.clone().map(ModelRef::Named))
            .ok_or_else(|| {
                Error::Configuration(format!("agent '{}' has no model configured", agent.name()))
            })?;

        match model_ref {
            ModelRef::Model(model) => Ok(model),
            ModelRef::Named(name) => {
                let provider = config
                    .model_provider
                    .as_ref()
                    .or(self.default_provider.as_ref())
                    .ok_or_else(|| {
                        Error::Configuration(format!(
                            "no model provider configured to resolve model '{name}'"
                        ))
                    })?;
                provider.get_model(&name).map_err(Error::model)
            }
        }
    }
}

impl fmt::Debug for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
            .field("default_provider", &self.default_provider.is_some())
            .field("default_model", &self.default_model)
            .field("tracing_disabled", &self.tracing_disabled)
            .finish()
    }
}

/// Builder for Runner
#[derive(Default)]
pub struct RunnerBuilder {
    default_provider: Option<Arc<dyn ModelProvider>>,
    default_model: Option<String>,
    tracing_disabled: bool,
}

impl RunnerBuilder {
    /// Create a new runner builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider used for named models when a run does not bring its own
    pub fn default_provider(mut self, provider: Arc<dyn ModelProvider>) -> Self {
        self.default_provider = Some(provider);
        self
    }

    /// Model name used when neither the run nor the agent sets one
    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    /// Disable run tracing for every run
    pub fn tracing_disabled(mut self, disabled: bool) -> Self {
        self.tracing_disabled = disabled;
        self
    }

    /// Build the runner
    pub fn build(self) -> Runner {
        Runner {
            default_provider: self.default_provider,
            default_model: self.default_model,
            tracing_disabled: self.tracing_disabled,
        }
    }
}
