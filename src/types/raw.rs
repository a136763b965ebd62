//! Untyped, line-faithful view of a CFG document

use serde::{Deserialize, Serialize};

/// A single `key = value` entry as found in the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParameter {
    /// Left of the first `=`, trimmed
    pub name: String,
    /// Right of the first `=`, trimmed and unparsed
    pub value: String,
    /// Comment lines directly above the parameter
    pub comments: Vec<String>,
}

impl RawParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>, comments: Vec<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            comments,
        }
    }
}

/// A `[Name]` group with its parameters in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSection {
    pub name: String,
    pub parameters: Vec<RawParameter>,
}

impl RawSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }
}

/// Result of parsing a CFG text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    /// Comment lines before the first section header
    pub header_comments: Vec<String>,
    pub sections: Vec<RawSection>,
}

impl RawDocument {
    pub fn parameter_count(&self) -> usize {
        self.sections.iter().map(|s| s.parameters.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
