//! Intent examples and the entity tags annotated on them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An entity annotation over a character span of an utterance.
///
/// `tag_type` must name a tag type registered on the owning agent
/// configuration; unregistered tags are stripped by
/// `AgentConfig::filter_invalid_intent_examples`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// The registered tag type this annotation refers to.
    pub tag_type: String,

    /// Character offset where the span starts (inclusive).
    pub start: usize,

    /// Character offset where the span ends (exclusive).
    pub end: usize,

    /// The surface text covered by the span, when recorded.
    #[serde(default)]
    pub value: Option<String>,
}

impl Tag {
    /// Creates a tag of the given type over `start..end`.
    pub fn new(tag_type: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            tag_type: tag_type.into(),
            start,
            end,
            value: None,
        }
    }

    /// Attaches the surface text covered by the span.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A single NLU training example: an utterance with its intent label and
/// optional entity tags.
///
/// Examples stored under `AgentConfig::intent_examples` carry
/// `intent: Some(..)`; out-of-domain examples carry `intent: None` and
/// `is_ood: true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentExample {
    /// The example utterance.
    pub text: String,

    /// The intent label, absent for out-of-domain examples.
    #[serde(default)]
    pub intent: Option<String>,

    /// Entity annotations over `text`.
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,

    /// Whether the utterance is intentionally outside every intent.
    #[serde(default, rename = "isOOD")]
    pub is_ood: bool,
}

impl IntentExample {
    /// Creates an example labeled with the given intent.
    pub fn new(text: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            intent: Some(intent.into()),
            tags: None,
            is_ood: false,
        }
    }

    /// Creates an out-of-domain example.
    pub fn ood(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            intent: None,
            tags: None,
            is_ood: true,
        }
    }

    /// Attaches entity tags to the example.
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Drops every tag whose type is not in `known_tag_types`.
    ///
    /// A `tags` field left empty by the stripping stays as `Some(vec![])`
    /// rather than reverting to `None`, so a repaired example remains
    /// distinguishable from one that never carried tags.
    pub fn retain_known_tags(&mut self, known_tag_types: &BTreeSet<String>) {
        if let Some(tags) = &mut self.tags {
            tags.retain(|tag| known_tag_types.contains(&tag.tag_type));
        }
    }
}
