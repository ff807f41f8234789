//! Flat NLU dataset: one record per training example.

use crate::domain::nlu::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One record of an NLU dataset.
///
/// Out-of-domain records carry `intent: None`; that absent label is the OOD
/// sentinel reported by `NluDataset::unique_labels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NluExample {
    pub text: String,

    #[serde(default)]
    pub intent: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<Tag>>,

    #[serde(default, rename = "isOOD")]
    pub is_ood: bool,
}

/// A flat, order-preserving sequence of NLU examples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NluDataset {
    examples: Vec<NluExample>,
}

impl NluDataset {
    /// Creates a dataset from the given examples, preserving their order.
    pub fn from_examples(examples: Vec<NluExample>) -> Self {
        Self { examples }
    }

    /// Returns the number of examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Returns true if the dataset has no examples.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Iterates over the examples in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &NluExample> {
        self.examples.iter()
    }

    /// Returns the set of intent labels present in the dataset.
    ///
    /// Includes `None` exactly when the dataset contains out-of-domain
    /// records.
    pub fn unique_labels(&self) -> BTreeSet<Option<String>> {
        self.examples.iter().map(|ex| ex.intent.clone()).collect()
    }
}

impl IntoIterator for NluDataset {
    type Item = NluExample;
    type IntoIter = std::vec::IntoIter<NluExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.into_iter()
    }
}

impl<'a> IntoIterator for &'a NluDataset {
    type Item = &'a NluExample;
    type IntoIter = std::slice::Iter<'a, NluExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}

impl FromIterator<NluExample> for NluDataset {
    fn from_iter<I: IntoIterator<Item = NluExample>>(iter: I) -> Self {
        Self {
            examples: iter.into_iter().collect(),
        }
    }
}
