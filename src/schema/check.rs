//! Static diagnostics over a built schema

use crate::schema::symbols::SymbolMapping;
use crate::types::{ConfigSchema, ParameterSchema, ParameterType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A suspicious spot in the schema; never fatal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaWarning {
    pub section: String,
    pub parameter: Option<String>,
    pub message: String,
}

impl SchemaWarning {
    fn section(section: &str, message: String) -> Self {
        Self {
            section: section.to_string(),
            parameter: None,
            message,
        }
    }

    fn parameter(section: &str, param: &ParameterSchema, message: String) -> Self {
        Self {
            section: section.to_string(),
            parameter: Some(param.name.clone()),
            message,
        }
    }
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(param) => write!(f, "{}.{}: {}", self.section, param, self.message),
            None => write!(f, "{}: {}", self.section, self.message),
        }
    }
}

/// Result of schema checking
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub warnings: Vec<SchemaWarning>,
    /// Warnings never make a schema unusable
    pub is_valid: bool,
}

/// Check a schema (and the symbol mapping it was built with)
///
/// This function looks for:
/// - Ranges whose minimum exceeds their maximum
/// - Enum defaults missing from the listed values
/// - Enum labels that do not line up with the values
/// - Parameter names declared twice in one section
/// - Symbol mapping entries naming no section
pub fn check(schema: &ConfigSchema, symbol_mapping: &SymbolMapping) -> CheckResult {
    let mut warnings = Vec::new();

    for section in schema.sections.values() {
        let mut seen = HashSet::new();

        for param in &section.parameters {
            if !seen.insert(param.name.as_str()) {
                warnings.push(SchemaWarning::parameter(
                    &section.name,
                    param,
                    "Parameter declared more than once".to_string(),
                ));
            }

            if let (Some(min), Some(max)) = (param.min, param.max)
                && min > max
            {
                warnings.push(SchemaWarning::parameter(
                    &section.name,
                    param,
                    format!("Minimum {min} is greater than maximum {max}"),
                ));
            }

            if param.param_type == ParameterType::Enum {
                check_enum(&section.name, param, &mut warnings);
            }
        }
    }

    for name in symbol_mapping.keys() {
        if schema.get_section(name).is_none() {
            warnings.push(SchemaWarning::section(
                name,
                "Symbol mapping names a section that does not exist".to_string(),
            ));
        }
    }

    CheckResult {
        is_valid: true,
        warnings,
    }
}

fn check_enum(section: &str, param: &ParameterSchema, warnings: &mut Vec<SchemaWarning>) {
    let values = param.possible_values.as_deref().unwrap_or_default();
    if values.is_empty() {
        warnings.push(SchemaWarning::parameter(
            section,
            param,
            "Enum has no possible values".to_string(),
        ));
        return;
    }

    let default = param.default.to_string();
    if !values.contains(&default) {
        warnings.push(SchemaWarning::parameter(
            section,
            param,
            format!("Default '{default}' is not one of: {}", values.join(", ")),
        ));
    }

    if let Some(labels) = &param.labels
        && labels.len() != values.len()
    {
        warnings.push(SchemaWarning::parameter(
            section,
            param,
            format!("{} labels for {} values", labels.len(), values.len()),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::schema::extract;

    #[test]
    fn check_inverted_range_warning() {
        let cfg = r#"
[Memory]
# Type: Int
# Possible Values: 32-8
nMemorySize = 8
"#;

        let schema = extract(&parse(cfg), &SymbolMapping::new());
        let result = check(&schema, &SymbolMapping::new());

        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("greater than maximum"));
        assert_eq!(result.warnings[0].parameter.as_deref(), Some("nMemorySize"));
    }

    #[test]
    fn check_enum_default_outside_values() {
        let cfg = r#"
[System]
# Possible Values: 0, 1, 2
nMachineType = 5
"#;

        let schema = extract(&parse(cfg), &SymbolMapping::new());
        let result = check(&schema, &SymbolMapping::new());

        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("'5'"));
        assert_eq!(
            result.warnings[0].to_string(),
            "System.nMachineType: Default '5' is not one of: 0, 1, 2"
        );
    }

    #[test]
    fn check_duplicate_parameter_and_unknown_symbol() {
        let cfg = "[System]\nnValue = 1\nnValue = 2\n";
        let schema = extract(&parse(cfg), &SymbolMapping::new());

        let mut mapping = SymbolMapping::new();
        mapping.insert("Ghost".into(), "cpu".into());
        let result = check(&schema, &mapping);

        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].message.contains("more than once"));
        assert_eq!(result.warnings[1].section, "Ghost");
        assert!(result.warnings[1].parameter.is_none());
    }

    #[test]
    fn check_valid_schema_no_warnings() {
        let cfg = r#"
[System]
# Type: Int
# Possible Values: 0=CUBE030, 1=CUBE040
nMachineType = 1

# Type: Bool
bFast = TRUE
"#;

        let schema = extract(&parse(cfg), &SymbolMapping::new());
        let result = check(&schema, &SymbolMapping::new());

        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }
}
