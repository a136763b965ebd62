//! Facade over the schema pipeline
//!
//! Holds one extracted schema and exposes the convert/validate operations
//! against it, returning the flat `ValidationResult` shape UI callers expect.

use crate::converter::{self, Conversion};
use crate::error::SchemaError;
use crate::infrastructure::build_schema_from_text;
use crate::schema::{self, CheckResult, symbols::SymbolMapping};
use crate::types::{ConfigObject, ConfigSchema, ValidationResult};
use crate::{storage, validator};
use serde_json::Value;
use std::sync::Arc;

/// A reference schema plus the operations that need it
#[derive(Debug, Clone)]
pub struct ConfigEditor {
    schema: Arc<ConfigSchema>,
    app_version: Option<String>,
}

impl ConfigEditor {
    pub fn new(schema: impl Into<Arc<ConfigSchema>>) -> Self {
        Self {
            schema: schema.into(),
            app_version: None,
        }
    }

    /// Build the schema from reference CFG text
    pub fn from_reference(text: &str, symbol_mapping: &SymbolMapping) -> Result<Self, SchemaError> {
        Ok(Self::new(build_schema_from_text(text, symbol_mapping)?))
    }

    /// Version written into generated CFG headers
    pub fn with_app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = Some(version.into());
        self
    }

    pub fn schema(&self) -> &ConfigSchema {
        &self.schema
    }

    pub fn to_json(&self, cfg_text: &str) -> ConfigObject {
        converter::cfg_to_json(cfg_text, &self.schema)
    }

    /// Like `to_json` but also reports what was skipped
    pub fn convert(&self, cfg_text: &str) -> Conversion {
        converter::convert_cfg(cfg_text, &self.schema)
    }

    pub fn to_cfg(&self, config: &ConfigObject) -> String {
        converter::json_to_cfg(config, &self.schema, self.app_version.as_deref())
    }

    pub fn validate_value(&self, section: &str, parameter: &str, value: &Value) -> ValidationResult {
        validator::validate_value(section, parameter, value, &self.schema).into()
    }

    pub fn validate_object(&self, config: &ConfigObject) -> ValidationResult {
        validator::validate_object(config, &self.schema).into()
    }

    pub fn check(&self, symbol_mapping: &SymbolMapping) -> CheckResult {
        schema::check(&self.schema, symbol_mapping)
    }

    /// Serialize the schema to JSON bytes
    pub fn save_schema(&self) -> anyhow::Result<Vec<u8>> {
        storage::save_schema(&self.schema)
    }

    /// Restore an editor from bytes written by `save_schema`
    pub fn load_schema(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(Self::new(storage::load_schema(bytes)?))
    }
}
