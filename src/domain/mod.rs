//! Domain layer containing the agent definition model and dataset logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors)
//! - `agent` - Agent configuration aggregate, filters, and converters
//! - `conversation` - Dialogue turns, actions, and conversations
//! - `nlu` - Intent examples and entity tags
//! - `dataset` - Training-ready NLU and conversation dataset types

pub mod agent;
pub mod conversation;
pub mod dataset;
pub mod foundation;
pub mod nlu;
