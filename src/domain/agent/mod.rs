//! Agent configuration aggregate and its dataset operations.

mod config;
mod export;
mod registry;

pub use config::AgentConfig;
pub use export::AgentExport;
pub use registry::{AgentActionDefinition, Intent, TagType};
