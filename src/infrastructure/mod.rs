//! Infrastructure layer - loading and caching the reference schema
//!
//! Everything here touches the outside world (files) or process-wide
//! state; the parse/extract/validate/convert pipeline itself stays pure.

pub mod cache;
pub mod repositories;

pub use cache::SchemaCache;
pub use repositories::{
    FileSystemSchemaSource, InMemorySchemaSource, SchemaSource, build_schema,
    build_schema_from_text,
};
