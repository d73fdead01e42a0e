//! Agent runtime for dispatching prompts to a model
//!
//! An [`AgentDescriptor`] names an agent, holds its instructions and
//! (optionally) its model. The [`Runner`] resolves the model, layering a
//! [`RunConfig`] on top of the agent defaults, sends one request and
//! returns a [`RunResult`]. Both an async ([`Runner::run`]) and a blocking
//! ([`Runner::run_sync`]) entry point are provided.

pub mod agents;
pub mod descriptor;
pub mod result;
pub mod runner;

// Re-export key types
pub use agents::SimpleAgent;
pub use descriptor::{AgentDescriptor, ModelRef, ModelSettings};
pub use result::RunResult;
pub use runner::{DEFAULT_WORKFLOW_NAME, RunConfig, Runner, RunnerBuilder};
