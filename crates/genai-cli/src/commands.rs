//! Demo commands
//!
//! Every command builds its client from the [`ApiConfig`] it is handed;
//! nothing is shared through globals.

use crate::Mode;
use anyhow::{Context as _, Result};
use genai_llm::providers::OpenAIProvider;
use genai_llm::{ChatCompletionsModel, ClientModelProvider, LLMProvider};
use genai_runtime::{AgentDescriptor, RunConfig, RunResult, Runner};
use genai_utils::ApiConfig;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// Name of the AI tutor agent
pub const TUTOR_NAME: &str = "Gemini Agent";

/// Instructions of the AI tutor agent
pub const TUTOR_INSTRUCTIONS: &str = "\
You are a helpful AI assistant. Your primary responsibility is to teach and assist the user with topics related to Artificial Intelligence (AI).

Guidelines:
1. Only respond to questions that are related to AI, including but not limited to:
- Machine Learning
- Deep Learning
- Natural Language Processing
- Computer Vision
- Generative AI
- AI tools, models, frameworks, and concepts
2. If the user asks a question that is not related to AI, politely respond with:
\"I'm just an AI Assistant specialized in Artificial Intelligence. I don't have knowledge in other fields.\"

Remember, your goal is to educate and assist the user in learning AI effectively.";

const HELLO_SYNC_PROMPT: &str = "Hello tell me about AI, Gen AI and AGentic AI";
const HELLO_ASYNC_PROMPT: &str = "Tell me about MCP Servers in Agentic AI";

/// Build the chat-completions client for the configured endpoint
pub fn client(api: &ApiConfig) -> Result<Arc<dyn LLMProvider>> {
    let provider = OpenAIProvider::from_api_config(api).context("failed to create API client")?;
    Ok(Arc::new(provider))
}

/// The AI tutor agent, bound to `model`
pub fn ai_tutor_agent(model: ChatCompletionsModel) -> AgentDescriptor {
    AgentDescriptor::new(TUTOR_NAME, TUTOR_INSTRUCTIONS).with_model(model)
}

/// Run configuration carrying model, provider and tracing switch
fn run_config_for(model: &ChatCompletionsModel) -> RunConfig {
    RunConfig::new()
        .with_model(model.clone())
        .with_model_provider(Arc::new(ClientModelProvider::new(model.client().clone())))
        .with_tracing_disabled(true)
}

/// Drive one future to completion on a current-thread runtime
///
/// Built per call and dropped afterwards, so a following `run_sync` is
/// never nested inside it.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    Ok(runtime.block_on(future))
}

fn print_result(result: &RunResult) {
    debug!(
        agent = %result.last_agent,
        model = %result.model,
        tokens = result.usage.total(),
        "Run complete"
    );
    println!("{}", result.final_output);
}

/// AI tutor: one blocking run, then one awaited run
pub fn hello(api: &ApiConfig) -> Result<()> {
    let model = ChatCompletionsModel::new(&api.model, client(api)?);
    let config = run_config_for(&model);
    let agent = ai_tutor_agent(model);
    let runner = Runner::new();

    let result = runner.run_sync(&agent, HELLO_SYNC_PROMPT, &config)?;
    print_result(&result);

    let result = block_on(runner.run(&agent, HELLO_ASYNC_PROMPT, &config))??;
    print_result(&result);

    Ok(())
}

/// Runner-, agent- and run-level model configuration, one run each
pub fn levels(api: &ApiConfig) -> Result<()> {
    // Runner level: the runner owns the provider and the default model.
    let runner = Runner::builder()
        .default_provider(Arc::new(ClientModelProvider::new(client(api)?)))
        .default_model(api.model.clone())
        .build();
    let agent = AgentDescriptor::new("Assistant", "You are a helpful assistant");
    let result = runner.run_sync(&agent, "Hello, how are you.", &RunConfig::default())?;
    print_result(&result);

    // Agent level: the agent carries a concrete model on its own client.
    let runner = Runner::builder().tracing_disabled(true).build();
    let agent = AgentDescriptor::new("Assistant", "You only respond in haikus.")
        .with_model(ChatCompletionsModel::new(&api.model, client(api)?));
    let result = runner.run_sync(&agent, "Hey, Whats your name?", &RunConfig::default())?;
    print_result(&result);

    // Run level: everything comes in with the run configuration.
    let model = ChatCompletionsModel::new(&api.model, client(api)?);
    let config = run_config_for(&model);
    let agent = AgentDescriptor::new("Assistant", "You are a helpful assistant").with_model(model);
    let result = Runner::new().run_sync(&agent, "Hello", &config)?;
    print_result(&result);

    Ok(())
}

/// One prompt with user-supplied agent settings
pub fn ask(api: &ApiConfig, prompt: &str, name: &str, instructions: &str, mode: Mode) -> Result<()> {
    let model = ChatCompletionsModel::new(&api.model, client(api)?);
    let config = run_config_for(&model);
    let agent = AgentDescriptor::new(name, instructions).with_model(model);
    let runner = Runner::new();

    let result = match mode {
        Mode::Sync => runner.run_sync(&agent, prompt, &config)?,
        Mode::Async => block_on(runner.run(&agent, prompt, &config))??,
    };
    print_result(&result);

    Ok(())
}
