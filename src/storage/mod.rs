//! Storage module for schema and configuration artefacts
//!
//! The generated schema and typed configurations are exchanged as pretty
//! printed JSON.

use crate::types::{ConfigObject, ConfigSchema};

/// Save a schema to JSON bytes
pub fn save_schema(schema: &ConfigSchema) -> anyhow::Result<Vec<u8>> {
    let json = serde_json::to_string_pretty(schema)?;
    Ok(json.into_bytes())
}

/// Load a schema from JSON bytes
pub fn load_schema(bytes: &[u8]) -> anyhow::Result<ConfigSchema> {
    let json = std::str::from_utf8(bytes)?;
    let schema = serde_json::from_str(json)?;
    Ok(schema)
}

/// Save a typed configuration to JSON bytes
pub fn save_config(config: &ConfigObject) -> anyhow::Result<Vec<u8>> {
    let json = serde_json::to_string_pretty(config)?;
    Ok(json.into_bytes())
}

/// Load a typed configuration from JSON bytes
pub fn load_config(bytes: &[u8]) -> anyhow::Result<ConfigObject> {
    let json = std::str::from_utf8(bytes)?;
    let config = serde_json::from_str(json)?;
    Ok(config)
}
