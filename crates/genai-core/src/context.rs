//! Per-run execution context
//!
//! A `Context` is created by the runner for every dispatch and handed to the
//! agent. It carries the run's identity (workflow name), whether run-level
//! tracing is on, and a small key-value store the agent fills with details
//! about the call (resolved model, token usage).

use serde_json::Value;
use std::collections::HashMap;

/// Well-known context keys written during a run
pub mod keys {
    /// Name of the model that served the request
    pub const MODEL: &str = "model";
    /// Input tokens reported by the API
    pub const INPUT_TOKENS: &str = "input_tokens";
    /// Output tokens reported by the API
    pub const OUTPUT_TOKENS: &str = "output_tokens";
}

/// Context passed to agents during execution
///
/// # Example
///
/// ```
/// use genai_core::Context;
///
/// let ctx = Context::new("Agent workflow").with_tracing(false);
///
/// assert_eq!(ctx.workflow_name(), "Agent workflow");
/// assert!(!ctx.tracing_enabled());
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    workflow_name: String,
    tracing_enabled: bool,
    data: HashMap<String, Value>,
}

impl Context {
    /// Create a context for the named workflow, with tracing on
    pub fn new(workflow_name: impl Into<String>) -> Self {
        Self {
            workflow_name: workflow_name.into(),
            tracing_enabled: true,
            data: HashMap::new(),
        }
    }

    /// Enable or disable run tracing
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing_enabled = enabled;
        self
    }

    /// Workflow name of this run
    pub fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    /// Whether run-level trace events should be emitted
    pub fn tracing_enabled(&self) -> bool {
        self.tracing_enabled
    }

    /// Insert a value into the context
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    /// Get a value from the context
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Get a string value from the context
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Get an unsigned integer value from the context
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    /// Check if a key exists in the context
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get the number of entries in the context
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the context holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
