//! Typed schema inferred from a reference CFG document

use crate::types::value::ConfigValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of parameter types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
    Enum,
    Range,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
            Self::Range => "range",
        }
    }

    /// Number and range share coercion and bounds semantics
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::Range)
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata of one parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    /// Already coerced to `param_type`
    pub default: ConfigValue,
    /// From the `Meaning:` annotation, empty when absent
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub translation_key: String,
    /// Enum values, parallel to `labels`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl ParameterSchema {
    /// Minimal schema entry; annotations are attached by the extractor
    pub fn new(name: impl Into<String>, param_type: ParameterType, default: ConfigValue) -> Self {
        let name = name.into();
        Self {
            translation_key: format!("configEditor.parameters.{name}"),
            name,
            param_type,
            default,
            description: String::new(),
            display_name: None,
            possible_values: None,
            labels: None,
            min: None,
            max: None,
        }
    }

    pub fn with_bounds(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_values(mut self, values: Vec<String>, labels: Vec<String>) -> Self {
        self.possible_values = Some(values);
        self.labels = Some(labels);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Metadata of one section and its parameters in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSchema {
    pub name: String,
    pub display_name: String,
    pub translation_key: String,
    /// Icon hint
    pub sf_symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Vec<ParameterSchema>,
}

impl SectionSchema {
    pub fn get_parameter(&self, name: &str) -> Option<&ParameterSchema> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// All sections keyed by name, iterated in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigSchema {
    pub sections: IndexMap<String, SectionSchema>,
}

impl ConfigSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, replacing any previous one with the same name
    /// while keeping its original position
    pub fn insert(&mut self, section: SectionSchema) {
        self.sections.insert(section.name.clone(), section);
    }

    pub fn get_section(&self, name: &str) -> Option<&SectionSchema> {
        self.sections.get(name)
    }

    pub fn get_parameter(&self, section: &str, parameter: &str) -> Option<&ParameterSchema> {
        self.get_section(section)?.get_parameter(parameter)
    }

    pub fn parameter_count(&self) -> usize {
        self.sections.values().map(|s| s.parameters.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
