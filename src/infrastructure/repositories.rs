//! Sources of the reference CFG text and the optional symbol mapping

use crate::error::SchemaError;
use crate::parser;
use crate::schema::{self, parse_symbol_mapping, symbols::SymbolMapping};
use crate::types::ConfigSchema;
use async_trait::async_trait;
use std::path::PathBuf;

/// Where the reference configuration comes from
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Reference CFG text; failing here is fatal for schema construction
    async fn load_reference(&self) -> Result<String, SchemaError>;

    /// Symbol mapping text, `None` when there is none
    async fn load_symbol_mapping(&self) -> Result<Option<String>, SchemaError> {
        Ok(None)
    }
}

/// Read both inputs from a source and build the schema
pub async fn build_schema(source: &dyn SchemaSource) -> Result<ConfigSchema, SchemaError> {
    let reference = source.load_reference().await?;
    let mapping = match source.load_symbol_mapping().await? {
        Some(text) => parse_symbol_mapping(&text)?,
        None => SymbolMapping::new(),
    };

    build_schema_from_text(&reference, &mapping)
}

/// Build a schema from reference text already in memory
pub fn build_schema_from_text(
    reference: &str,
    mapping: &SymbolMapping,
) -> Result<ConfigSchema, SchemaError> {
    let document = parser::parse(reference);
    if document.is_empty() {
        return Err(SchemaError::EmptyReference);
    }
    log::debug!(
        "Reference has {} sections and {} parameters",
        document.sections.len(),
        document.parameter_count()
    );
    Ok(schema::extract(&document, mapping))
}

/// File system implementation of SchemaSource
pub struct FileSystemSchemaSource {
    reference_path: PathBuf,
    symbol_mapping_path: Option<PathBuf>,
}

impl FileSystemSchemaSource {
    pub fn new<P: Into<PathBuf>>(reference_path: P) -> Self {
        Self {
            reference_path: reference_path.into(),
            symbol_mapping_path: None,
        }
    }

    pub fn with_symbol_mapping<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.symbol_mapping_path = Some(path.into());
        self
    }
}

#[async_trait]
impl SchemaSource for FileSystemSchemaSource {
    async fn load_reference(&self) -> Result<String, SchemaError> {
        tokio::fs::read_to_string(&self.reference_path)
            .await
            .map_err(|e| SchemaError::io(&self.reference_path, e))
    }

    async fn load_symbol_mapping(&self) -> Result<Option<String>, SchemaError> {
        let Some(path) = &self.symbol_mapping_path else {
            return Ok(None);
        };

        match tokio::fs::read_to_string(path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No symbol mapping at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(SchemaError::io(path, e)),
        }
    }
}

/// In-memory implementation for testing
pub struct InMemorySchemaSource {
    reference: String,
    symbol_mapping: Option<String>,
}

impl InMemorySchemaSource {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            symbol_mapping: None,
        }
    }

    pub fn with_symbol_mapping(mut self, mapping: impl Into<String>) -> Self {
        self.symbol_mapping = Some(mapping.into());
        self
    }
}

#[async_trait]
impl SchemaSource for InMemorySchemaSource {
    async fn load_reference(&self) -> Result<String, SchemaError> {
        Ok(self.reference.clone())
    }

    async fn load_symbol_mapping(&self) -> Result<Option<String>, SchemaError> {
        Ok(self.symbol_mapping.clone())
    }
}
