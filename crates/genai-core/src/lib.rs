//! Core abstractions for genai-agents
//!
//! This crate defines the trait every runnable agent implements, the
//! per-run context handed to it, and the shared error type.

pub mod agent;
pub mod context;
pub mod error;

pub use agent::Agent;
pub use context::Context;
pub use error::{Error, Result};
