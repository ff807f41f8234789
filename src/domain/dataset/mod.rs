//! Training-ready dataset types derived from an agent configuration.

mod conversation_dataset;
mod nlu_dataset;

pub use conversation_dataset::ConversationDataset;
pub use nlu_dataset::{NluDataset, NluExample};
