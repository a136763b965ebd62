//! Core types shared by every pipeline stage
//!
//! - Raw: untyped parser output (sections, parameters, comment blocks)
//! - Schema: typed description inferred from comment annotations
//! - Value: typed configuration values and the JSON configuration object
//! - Validation: wire form of a validation outcome

pub mod raw;
pub mod schema;
pub mod validation;
pub mod value;

pub use raw::{RawDocument, RawParameter, RawSection};
pub use schema::{ConfigSchema, ParameterSchema, ParameterType, SectionSchema};
pub use validation::ValidationResult;
pub use value::{ConfigObject, ConfigValue, SectionValues};
