//! Dialogue turns and the actions they carry.

use crate::domain::nlu::Tag;
use serde::{Deserialize, Serialize};

/// Action type shared by plain-utterance user and agent actions.
pub const UTTERANCE_ACTION: &str = "UTTERANCE_ACTION";

fn utterance_action() -> String {
    UTTERANCE_ACTION.to_string()
}

/// What the user did in their turn: an utterance, optionally labeled with
/// an intent and annotated with entity tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAction {
    /// Action discriminator from the persisted form.
    #[serde(rename = "type", default = "utterance_action")]
    pub action_type: String,

    /// What the user said, when the turn carries text.
    #[serde(default)]
    pub utterance: Option<String>,

    /// The intent label for the utterance, when known.
    #[serde(default)]
    pub intent: Option<String>,

    /// Entity annotations over the utterance.
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

impl UserAction {
    /// Creates an utterance action with no text, intent, or tags.
    pub fn new() -> Self {
        Self {
            action_type: utterance_action(),
            utterance: None,
            intent: None,
            tags: None,
        }
    }

    /// Creates an utterance action carrying the given text.
    pub fn utterance(text: impl Into<String>) -> Self {
        Self {
            utterance: Some(text.into()),
            ..Self::new()
        }
    }

    /// Labels the utterance with an intent.
    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    /// Annotates the utterance with entity tags.
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }
}

impl Default for UserAction {
    fn default() -> Self {
        Self::new()
    }
}

/// What the agent did in its turn: a named action, optionally with the
/// utterance it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAction {
    /// Action discriminator from the persisted form.
    #[serde(rename = "type", default = "utterance_action")]
    pub action_type: String,

    /// The registered action name.
    pub name: String,

    /// The text the agent produced, when the action is an utterance.
    #[serde(default)]
    pub utterance: Option<String>,
}

impl AgentAction {
    /// Creates an agent action with the given registered name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            action_type: utterance_action(),
            name: name.into(),
            utterance: None,
        }
    }

    /// Attaches the utterance produced by the action.
    pub fn with_utterance(mut self, text: impl Into<String>) -> Self {
        self.utterance = Some(text.into());
        self
    }
}

/// A single turn of a conversation, authored by the user or by the agent.
///
/// Persisted turns are discriminated by their `actor` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "actor")]
pub enum DialogueTurn {
    #[serde(rename = "USER", rename_all = "camelCase")]
    User { user_action: UserAction },

    #[serde(rename = "AGENT", rename_all = "camelCase")]
    Agent { agent_action: AgentAction },
}

impl DialogueTurn {
    /// Creates a user turn.
    pub fn user(user_action: UserAction) -> Self {
        Self::User { user_action }
    }

    /// Creates an agent turn.
    pub fn agent(agent_action: AgentAction) -> Self {
        Self::Agent { agent_action }
    }

    /// Returns true if the turn was authored by the agent.
    pub fn is_agent(&self) -> bool {
        matches!(self, Self::Agent { .. })
    }

    /// Returns the user action, if this is a user turn.
    pub fn as_user_action(&self) -> Option<&UserAction> {
        match self {
            Self::User { user_action } => Some(user_action),
            Self::Agent { .. } => None,
        }
    }

    /// Returns the agent action, if this is an agent turn.
    pub fn as_agent_action(&self) -> Option<&AgentAction> {
        match self {
            Self::User { .. } => None,
            Self::Agent { agent_action } => Some(agent_action),
        }
    }
}
