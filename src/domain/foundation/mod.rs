//! Shared domain primitives.

mod errors;

pub use errors::{AgentLoadError, FoldError};
