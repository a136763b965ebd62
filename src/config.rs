//! Tool configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_REFERENCE: &str = "CFGSCHEMA_REFERENCE";
pub const ENV_SYMBOLS: &str = "CFGSCHEMA_SYMBOLS";
pub const ENV_APP_VERSION: &str = "CFGSCHEMA_APP_VERSION";

/// Where the reference inputs live and how generated files are stamped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Reference CFG the schema is inferred from
    pub reference_path: PathBuf,
    /// Optional section -> icon mapping file
    pub symbol_mapping_path: Option<PathBuf>,
    /// Version written into the "Generated by" header
    pub app_version: Option<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::from("reference.cfg"),
            symbol_mapping_path: None,
            app_version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

impl ToolConfig {
    /// Defaults overlaid with the `CFGSCHEMA_*` environment variables
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Overlay the `CFGSCHEMA_*` environment variables
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup; empty values are ignored
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = get(ENV_REFERENCE) {
            self.reference_path = PathBuf::from(path);
        }
        if let Some(path) = get(ENV_SYMBOLS) {
            self.symbol_mapping_path = Some(PathBuf::from(path));
        }
        if let Some(version) = get(ENV_APP_VERSION) {
            self.app_version = Some(version);
        }
        self
    }
}
