//! Error types for schema construction and value validation

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions while building the reference schema
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Reference configuration defines no sections")]
    EmptyReference,

    #[error("Invalid symbol mapping at line {line}: {reason}")]
    SymbolMapping { line: usize, reason: String },

    #[error("Schema JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn symbol_mapping(line: usize, reason: impl Into<String>) -> Self {
        Self::SymbolMapping {
            line,
            reason: reason.into(),
        }
    }
}

/// Reasons a value does not satisfy the schema
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Section not found: {section}")]
    SectionNotFound { section: String },

    #[error("Parameter not found in section {section}: {parameter}")]
    ParameterNotFound { section: String, parameter: String },

    #[error("Invalid boolean value: {value}. Expected: true, false, TRUE, FALSE, 1, or 0")]
    InvalidBoolean { value: String },

    #[error("Invalid number: {value}. Expected a numeric value")]
    InvalidNumber { value: String },

    #[error("Number {value} is below minimum: {min}")]
    BelowMinimum { value: String, min: i64 },

    #[error("Number {value} is above maximum: {max}")]
    AboveMaximum { value: String, max: i64 },

    #[error("Enum type has no possible values defined")]
    EnumWithoutValues,

    #[error("Invalid enum value: {value}. Allowed values: {}", allowed.join(", "))]
    InvalidEnumValue { value: String, allowed: Vec<String> },
}

impl ValidationError {
    pub fn section_not_found(section: impl Into<String>) -> Self {
        Self::SectionNotFound {
            section: section.into(),
        }
    }

    pub fn parameter_not_found(section: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::ParameterNotFound {
            section: section.into(),
            parameter: parameter.into(),
        }
    }

    /// True when the schema itself is misconfigured rather than the input
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::EnumWithoutValues)
    }
}
