//! Conversation entity - an ordered sequence of dialogue turns.

use crate::domain::conversation::{AgentAction, DialogueTurn, UserAction};
use serde::{Deserialize, Serialize};

/// An ordered sequence of dialogue turns.
///
/// A conversation only qualifies as training data when it has at least one
/// turn and at least one agent-authored turn; see
/// `AgentConfig::filter_no_agent_convs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub turns: Vec<DialogueTurn>,
}

impl Conversation {
    /// Creates a conversation from the given turns.
    pub fn new(turns: Vec<DialogueTurn>) -> Self {
        Self { turns }
    }

    /// Returns true if the conversation has no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Returns true if any turn was authored by the agent.
    pub fn has_agent_turn(&self) -> bool {
        self.turns.iter().any(DialogueTurn::is_agent)
    }

    /// Returns true if the conversation is usable as training data.
    pub fn is_trainable(&self) -> bool {
        !self.is_empty() && self.has_agent_turn()
    }

    /// Iterates over the user actions of the conversation, in turn order.
    pub fn user_actions(&self) -> impl Iterator<Item = &UserAction> {
        self.turns.iter().filter_map(DialogueTurn::as_user_action)
    }

    /// Iterates over the agent actions of the conversation, in turn order.
    pub fn agent_actions(&self) -> impl Iterator<Item = &AgentAction> {
        self.turns.iter().filter_map(DialogueTurn::as_agent_action)
    }

    /// Expands the conversation into next-action-prediction windows: one
    /// sub-conversation per agent turn, each covering the turns up to and
    /// including that agent turn.
    pub fn expansions(&self) -> Vec<Conversation> {
        self.turns
            .iter()
            .enumerate()
            .filter(|(_, turn)| turn.is_agent())
            .map(|(i, _)| Conversation::new(self.turns[..=i].to_vec()))
            .collect()
    }
}
