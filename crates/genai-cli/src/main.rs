//! Command-line interface for genai-agents
//!
//! Reads `GEMINI_API_KEY` (and optional overrides) from the environment or
//! a `.env` file, then runs one of the demo commands. Agent output goes to
//! stdout; logs go to stderr.

mod commands;
#[cfg(test)]
mod stub;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use genai_utils::ApiConfig;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "genai-agent", version)]
#[command(about = "Run a conversational agent against a Gemini-compatible chat API", long_about = None)]
struct Cli {
    /// Model name (overrides GEMINI_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// API base URL (overrides GEMINI_API_BASE)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides GEMINI_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Run the AI tutor agent once synchronously, then once asynchronously
    Hello,

    /// Show runner-, agent- and run-level model configuration
    Levels,

    /// Send one prompt to an agent
    Ask {
        /// Prompt to send
        prompt: String,

        /// Agent name
        #[arg(long, default_value = "Assistant")]
        name: String,

        /// Agent instructions
        #[arg(long, default_value = "You are a helpful assistant")]
        instructions: String,

        /// Dispatch mode
        #[arg(long, value_enum, default_value_t = Mode::Sync)]
        mode: Mode,
    },
}

/// How a prompt is dispatched
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Blocking call on the main thread
    Sync,
    /// Single awaited call on a current-thread runtime
    Async,
}

// `main` stays synchronous: `Runner::run_sync` refuses to run inside a Tokio
// runtime (a blocking pool thread counts too), so the awaited half of each
// command gets its own current-thread runtime in `commands::block_on`.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    genai_utils::init_tracing();

    let cli = Cli::parse();

    // Credential check happens before any command touches the network.
    let api = api_config(&cli, ApiConfig::from_env()?);

    info!(api_base = %api.api_base, model = %api.model, "Starting genai-agent");

    match cli.command {
        Command::Hello => commands::hello(&api),
        Command::Levels => commands::levels(&api),
        Command::Ask {
            prompt,
            name,
            instructions,
            mode,
        } => commands::ask(&api, &prompt, &name, &instructions, mode),
    }
}

/// Apply command-line overrides on top of the environment
fn api_config(cli: &Cli, mut api: ApiConfig) -> ApiConfig {
    if let Some(model) = &cli.model {
        api = api.with_model(model.clone());
    }
    if let Some(base_url) = &cli.base_url {
        api = api.with_api_base(base_url.clone());
    }
    if let Some(timeout) = cli.timeout {
        api = api.with_timeout(timeout);
    }
    api
}
