//! Registry entries owned by an agent configuration.
//!
//! Intents, tag types, and actions are registered by name on the
//! configuration; filters consult these registries to decide which training
//! data is referentially valid.

use serde::{Deserialize, Serialize};

/// A registered intent label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
}

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A registered entity tag type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagType {
    pub name: String,
}

impl TagType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A registered agent-side action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentActionDefinition {
    pub name: String,
}

impl AgentActionDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_entries_serialize_by_name() {
        let intent = Intent::new("greet");
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["name"], "greet");
    }

    #[test]
    fn registry_entries_compare_by_value() {
        assert_eq!(TagType::new("city"), TagType::new("city"));
        assert_ne!(
            AgentActionDefinition::new("greet_user"),
            AgentActionDefinition::new("say_goodbye")
        );
    }
}
