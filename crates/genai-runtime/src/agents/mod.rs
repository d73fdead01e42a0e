//! Concrete agent implementations
//!
//! - SimpleAgent: one model call per input, no tools

pub mod simple;

pub use simple::SimpleAgent;
