//! NLU training examples and entity tags.

mod example;

pub use example::{IntentExample, Tag};
