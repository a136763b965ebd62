//! # cfgschema
//!
//! Turns annotated reference `.cfg` files into a typed configuration schema,
//! validates user values against it, and converts configs between CFG text
//! and typed JSON.
//!
//! The pipeline is made of four pure stages: [`parser`] reads CFG text,
//! [`schema`] infers parameter metadata from comments, [`validator`] checks
//! values, and [`converter`] moves between the CFG and JSON forms. Loading
//! the reference file and caching the schema live in [`infrastructure`].
//!
//! ## Quick Start
//!
//! ```rust
//! use cfgschema::{ConfigValue, cfg_to_json, extract_schema, json_to_cfg, parse_cfg};
//! use cfgschema::schema::symbols::SymbolMapping;
//!
//! let reference = "\
//! [ConfigDialog]
//! # Type: Bool
//! # Meaning: Show dialog at startup
//! bShowDialog = TRUE
//! ";
//!
//! let schema = extract_schema(&parse_cfg(reference), &SymbolMapping::new());
//! let config = cfg_to_json("[ConfigDialog]\nbShowDialog = FALSE\n", &schema);
//! assert_eq!(config["ConfigDialog"]["bShowDialog"], ConfigValue::Boolean(false));
//!
//! let cfg = json_to_cfg(&config, &schema, Some("1.0.0"));
//! assert!(cfg.contains("bShowDialog = FALSE"));
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use cfgschema::{ValidationResult, validate_value};
//! use cfgschema::facade::ConfigEditor;
//! use cfgschema::schema::symbols::SymbolMapping;
//! use serde_json::json;
//!
//! let editor = ConfigEditor::from_reference(
//!     "[System]\n# Possible Values: 0-100\nnValue = 10\n",
//!     &SymbolMapping::new(),
//! )
//! .unwrap();
//!
//! let result = ValidationResult::from(validate_value("System", "nValue", &json!(-1), editor.schema()));
//! assert!(!result.valid);
//! assert!(result.error.unwrap().contains("below minimum"));
//! ```

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod facade;
pub mod infrastructure;
pub mod numeric;
pub mod parser;
pub mod schema;
pub mod storage;
pub mod types;
pub mod validator;

// Pipeline entry points
pub use converter::{cfg_to_json, convert_cfg, extract_created_date, json_to_cfg};
pub use parser::{parse as parse_cfg, validate_structure as validate_raw_structure};
pub use schema::extract as extract_schema;
pub use validator::{validate_object, validate_value};

pub use config::ToolConfig;
pub use error::{SchemaError, ValidationError};
pub use facade::ConfigEditor;
pub use infrastructure::{SchemaCache, SchemaSource};
pub use types::{
    ConfigObject, ConfigSchema, ConfigValue, ParameterSchema, ParameterType, RawDocument,
    RawParameter, RawSection, SectionSchema, ValidationResult,
};
