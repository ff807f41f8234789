//! AgentConfig aggregate - the in-memory agent definition.

use crate::domain::agent::{AgentActionDefinition, Intent, TagType};
use crate::domain::conversation::{Conversation, DialogueTurn};
use crate::domain::dataset::{ConversationDataset, NluDataset, NluExample};
use crate::domain::nlu::IntentExample;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// The full definition of a conversational agent: its registered intents,
/// tag types, and actions, plus the NLU examples and training conversations
/// authored for it.
///
/// Configurations are loaded from a persisted export (see `AgentExport`) or
/// rebuilt from a `ConversationDataset`. Filters mutate the configuration in
/// place; dataset conversions never do.
///
/// Not thread-safe for mutation; callers must serialize writes to a given
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    pub name: String,

    /// Registered intent labels.
    #[serde(default)]
    pub intents: Vec<Intent>,

    /// Registered entity tag types.
    #[serde(default)]
    pub tag_types: Vec<TagType>,

    /// Registered agent-side actions.
    #[serde(default)]
    pub actions: Vec<AgentActionDefinition>,

    /// Conversations authored as training data.
    #[serde(default)]
    pub training_conversations: Vec<Conversation>,

    /// NLU examples grouped by intent label. The map keeps key order
    /// stable, which keeps every dataset conversion deterministic.
    #[serde(default)]
    pub intent_examples: BTreeMap<String, Vec<IntentExample>>,

    /// Out-of-domain examples, associated with no intent.
    #[serde(default, rename = "intentOODExamples")]
    pub intent_ood_examples: Vec<IntentExample>,
}

impl AgentConfig {
    /// Creates an empty configuration with the given agent name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            intents: Vec::new(),
            tag_types: Vec::new(),
            actions: Vec::new(),
            training_conversations: Vec::new(),
            intent_examples: BTreeMap::new(),
            intent_ood_examples: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the registered intent labels.
    pub fn intent_names(&self) -> BTreeSet<String> {
        self.intents.iter().map(|i| i.name.clone()).collect()
    }

    /// Returns the registered tag-type labels.
    pub fn tag_names(&self) -> BTreeSet<String> {
        self.tag_types.iter().map(|t| t.name.clone()).collect()
    }

    /// Returns the agent-action labels: every registered action plus every
    /// action observed in the training conversations.
    pub fn action_names(&self) -> BTreeSet<String> {
        let mut names: BTreeSet<String> =
            self.actions.iter().map(|a| a.name.clone()).collect();
        for conv in &self.training_conversations {
            names.extend(conv.agent_actions().map(|a| a.name.clone()));
        }
        names
    }

    /// Iterates over every NLU example: the grouped examples first (map key
    /// order, insertion order within a group), then the out-of-domain
    /// examples.
    pub fn all_nlu_examples(&self) -> impl Iterator<Item = &IntentExample> {
        self.intent_examples
            .values()
            .flatten()
            .chain(self.intent_ood_examples.iter())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────

    /// Removes every training conversation that has no turns or no
    /// agent-authored turn. Preserves the order of the rest. Idempotent.
    pub fn filter_no_agent_convs(&mut self) {
        let before = self.training_conversations.len();
        self.training_conversations.retain(Conversation::is_trainable);
        let removed = before - self.training_conversations.len();
        if removed > 0 {
            tracing::debug!(removed, "dropped conversations with no agent turns");
        }
    }

    /// Removes every grouped NLU example whose intent is unregistered, and
    /// strips tags with unregistered tag types from the examples that
    /// remain (including out-of-domain examples).
    ///
    /// An example whose only problem is an unregistered tag is repaired and
    /// kept; an example with an unregistered intent is dropped outright.
    pub fn filter_invalid_intent_examples(&mut self) {
        let intents = self.intent_names();
        let tags = self.tag_names();
        let before = self.all_nlu_examples().count();

        let groups = std::mem::take(&mut self.intent_examples);
        for (intent, examples) in groups {
            if !intents.contains(&intent) {
                continue;
            }
            let examples: Vec<IntentExample> = examples
                .into_iter()
                .filter(|ex| ex.intent.as_ref().is_some_and(|i| intents.contains(i)))
                .map(|mut ex| {
                    ex.retain_known_tags(&tags);
                    ex
                })
                .collect();
            self.intent_examples.insert(intent, examples);
        }
        for ex in &mut self.intent_ood_examples {
            ex.retain_known_tags(&tags);
        }

        let removed = before - self.all_nlu_examples().count();
        if removed > 0 {
            tracing::debug!(removed, "dropped NLU examples with unregistered intents");
        }
    }

    /// Applies every filter needed to make the configuration safe for
    /// dataset conversion.
    pub fn clean(&mut self) {
        self.filter_no_agent_convs();
        self.filter_invalid_intent_examples();
    }

    /// Merges an NLU example into `intent_examples` for every user turn in
    /// the training conversations that carries both an utterance and an
    /// intent label. Duplicate `(text, intent)` pairs are skipped.
    pub fn incorporate_training_conversations(&mut self) {
        let mut seen: HashSet<(String, String)> = self
            .intent_examples
            .values()
            .flatten()
            .filter_map(|ex| {
                ex.intent
                    .as_ref()
                    .map(|intent| (ex.text.clone(), intent.clone()))
            })
            .collect();

        let mut synthesized: Vec<(String, IntentExample)> = Vec::new();
        for conv in &self.training_conversations {
            for action in conv.user_actions() {
                let (utterance, intent) = match (&action.utterance, &action.intent) {
                    (Some(utterance), Some(intent)) => (utterance, intent),
                    _ => continue,
                };
                if !seen.insert((utterance.clone(), intent.clone())) {
                    continue;
                }
                let example = IntentExample {
                    text: utterance.clone(),
                    intent: Some(intent.clone()),
                    tags: action.tags.clone(),
                    is_ood: false,
                };
                synthesized.push((intent.clone(), example));
            }
        }

        let added = synthesized.len();
        for (intent, example) in synthesized {
            self.intent_examples.entry(intent).or_default().push(example);
        }
        if added > 0 {
            tracing::debug!(added, "incorporated NLU examples from training conversations");
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dataset conversions
    // ─────────────────────────────────────────────────────────────────────

    /// Flattens the grouped NLU examples into a flat dataset, in stable
    /// order. With `include_ood`, the out-of-domain examples are appended
    /// as unlabeled records.
    pub fn to_nlu_dataset(&self, include_ood: bool) -> NluDataset {
        let mut examples: Vec<NluExample> = self
            .intent_examples
            .values()
            .flatten()
            .map(|ex| NluExample {
                text: ex.text.clone(),
                intent: ex.intent.clone(),
                tags: ex.tags.clone(),
                is_ood: ex.is_ood,
            })
            .collect();

        if include_ood {
            examples.extend(self.intent_ood_examples.iter().map(|ex| NluExample {
                text: ex.text.clone(),
                intent: None,
                tags: ex.tags.clone(),
                is_ood: true,
            }));
        }

        NluDataset::from_examples(examples)
    }

    /// Projects the training conversations into a conversation dataset.
    ///
    /// Without `expand`, the dataset is a 1:1, order-preserving copy of
    /// `training_conversations`; conversations whose user turns carry no
    /// intent label are kept. With `expand`, each conversation contributes
    /// one record per agent turn (see `Conversation::expansions`).
    pub fn to_conversation_dataset(&self, expand: bool) -> ConversationDataset {
        if expand {
            self.training_conversations
                .iter()
                .flat_map(Conversation::expansions)
                .collect()
        } else {
            self.training_conversations.iter().cloned().collect()
        }
    }

    /// Rebuilds a configuration from a conversation dataset.
    ///
    /// The new configuration owns the dataset's conversations in order, and
    /// registers exactly the intents, tag types, and actions observed in
    /// them (first-seen order); it never invents labels the conversations
    /// do not use.
    pub fn from_conversation_dataset(
        dataset: ConversationDataset,
        name: impl Into<String>,
    ) -> Self {
        let mut config = Self::new(name);

        let mut seen_intents = HashSet::new();
        let mut seen_tag_types = HashSet::new();
        let mut seen_actions = HashSet::new();
        for conv in dataset.iter() {
            for turn in &conv.turns {
                match turn {
                    DialogueTurn::User { user_action } => {
                        if let Some(intent) = &user_action.intent {
                            if seen_intents.insert(intent.clone()) {
                                config.intents.push(Intent::new(intent.clone()));
                            }
                        }
                        for tag in user_action.tags.iter().flatten() {
                            if seen_tag_types.insert(tag.tag_type.clone()) {
                                config.tag_types.push(TagType::new(tag.tag_type.clone()));
                            }
                        }
                    }
                    DialogueTurn::Agent { agent_action } => {
                        if seen_actions.insert(agent_action.name.clone()) {
                            config
                                .actions
                                .push(AgentActionDefinition::new(agent_action.name.clone()));
                        }
                    }
                }
            }
        }

        config.training_conversations = dataset.into_conversations();
        config
    }
}
