//! Conversations and the dialogue turns they are made of.
//!
//! A conversation is an ordered sequence of turns, each authored either by
//! the user (an utterance, optionally intent-labeled and tagged) or by the
//! agent (a named action).

mod conversation;
mod turn;

pub use conversation::Conversation;
pub use turn::{AgentAction, DialogueTurn, UserAction, UTTERANCE_ACTION};
