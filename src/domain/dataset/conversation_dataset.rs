//! Conversation dataset: an ordered sequence of training conversations.

use crate::domain::conversation::Conversation;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An order-preserving sequence of conversations, ready for conversation
/// model training or for reconstructing an agent configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationDataset {
    conversations: Vec<Conversation>,
}

impl ConversationDataset {
    /// Creates a dataset from the given conversations, preserving order.
    pub fn from_conversations(conversations: Vec<Conversation>) -> Self {
        Self { conversations }
    }

    /// Returns the number of conversations.
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Returns true if the dataset has no conversations.
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Iterates over the conversations in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.iter()
    }

    /// Consumes the dataset, yielding its conversations.
    pub fn into_conversations(self) -> Vec<Conversation> {
        self.conversations
    }
}

impl Index<usize> for ConversationDataset {
    type Output = Conversation;

    fn index(&self, index: usize) -> &Self::Output {
        &self.conversations[index]
    }
}

impl IntoIterator for ConversationDataset {
    type Item = Conversation;
    type IntoIter = std::vec::IntoIter<Conversation>;

    fn into_iter(self) -> Self::IntoIter {
        self.conversations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConversationDataset {
    type Item = &'a Conversation;
    type IntoIter = std::slice::Iter<'a, Conversation>;

    fn into_iter(self) -> Self::IntoIter {
        self.conversations.iter()
    }
}

impl FromIterator<Conversation> for ConversationDataset {
    fn from_iter<I: IntoIterator<Item = Conversation>>(iter: I) -> Self {
        Self {
            conversations: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{AgentAction, DialogueTurn, UserAction};

    fn sample_conversation(text: &str) -> Conversation {
        Conversation::new(vec![
            DialogueTurn::user(UserAction::utterance(text)),
            DialogueTurn::agent(AgentAction::new("respond")),
        ])
    }

    #[test]
    fn preserves_conversation_order() {
        let dataset = ConversationDataset::from_conversations(vec![
            sample_conversation("first"),
            sample_conversation("second"),
        ]);

        assert_eq!(dataset.len(), 2);
        let first_utterance = dataset[0].user_actions().next().unwrap();
        assert_eq!(first_utterance.utterance.as_deref(), Some("first"));
    }

    #[test]
    fn into_conversations_round_trips() {
        let convs = vec![sample_conversation("only")];
        let dataset = ConversationDataset::from_conversations(convs.clone());
        assert_eq!(dataset.into_conversations(), convs);
    }

    #[test]
    fn collects_from_iterator() {
        let dataset: ConversationDataset =
            (0..3).map(|i| sample_conversation(&format!("conv {i}"))).collect();
        assert_eq!(dataset.len(), 3);
    }
}
