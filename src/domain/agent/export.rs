//! Persisted agent export wrapper.

use crate::domain::agent::AgentConfig;
use crate::domain::foundation::AgentLoadError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The persisted form of an agent definition: a wrapper holding one
/// configuration under its `config` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentExport {
    pub config: AgentConfig,
}

impl AgentExport {
    /// Reads and parses an agent export from a JSON file.
    ///
    /// # Errors
    ///
    /// - `Io` when the file cannot be read
    /// - `Parse` when the contents are not a valid export
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self, AgentLoadError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_a_minimal_export() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"config": {{"name": "demo", "intents": [{{"name": "greet"}}]}}}}"#
        )
        .unwrap();

        let export = AgentExport::parse_file(file.path()).unwrap();
        assert_eq!(export.config.name, "demo");
        assert!(export.config.intent_names().contains("greet"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AgentExport::parse_file("/nonexistent/agent.json").unwrap_err();
        assert!(matches!(err, AgentLoadError::Io(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = AgentExport::parse_file(file.path()).unwrap_err();
        assert!(matches!(err, AgentLoadError::Parse(_)));
    }
}
