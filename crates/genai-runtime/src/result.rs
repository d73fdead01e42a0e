//! Outcome of a single run

use genai_llm::TokenUsage;
use std::fmt;

/// Result of dispatching one prompt to an agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Text produced by the model
    pub final_output: String,

    /// Name of the agent that produced the output
    pub last_agent: String,

    /// Model that served the request
    pub model: String,

    /// Token usage reported by the API
    pub usage: TokenUsage,
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.final_output)
    }
}
