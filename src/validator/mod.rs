//! Validation of runtime values against a schema
//!
//! Values arrive from UI input, imported files or API payloads, so they are
//! taken as arbitrary JSON and checked with type-specific rules. Failures are
//! returned, never raised.

use crate::error::ValidationError;
use crate::numeric::{coerce_number, format_number};
use crate::types::{ConfigObject, ConfigSchema, ParameterSchema, ParameterType};
use serde_json::Value;

/// Validate one value for `section.parameter`
pub fn validate_value(
    section: &str,
    parameter: &str,
    value: &Value,
    schema: &ConfigSchema,
) -> Result<(), ValidationError> {
    let section_schema = schema
        .get_section(section)
        .ok_or_else(|| ValidationError::section_not_found(section))?;

    let param = section_schema
        .get_parameter(parameter)
        .ok_or_else(|| ValidationError::parameter_not_found(section, parameter))?;

    validate_parameter_value(param, value)
}

/// Validate a value against an already resolved parameter schema
pub fn validate_parameter_value(
    param: &ParameterSchema,
    value: &Value,
) -> Result<(), ValidationError> {
    match param.param_type {
        ParameterType::Boolean => validate_boolean(value),
        numeric if numeric.is_numeric() => validate_number(value, param.min, param.max),
        ParameterType::Enum => validate_enum(value, param.possible_values.as_deref()),
        _ => Ok(()),
    }
}

/// Validate every value of a typed configuration; the first failure wins
pub fn validate_object(config: &ConfigObject, schema: &ConfigSchema) -> Result<(), ValidationError> {
    for (section, values) in config {
        for (parameter, value) in values {
            validate_value(section, parameter, &Value::from(value), schema)?;
        }
    }
    Ok(())
}

/// Validate an untyped JSON configuration
///
/// Section entries that are not JSON objects are skipped.
pub fn validate_json(config: &Value, schema: &ConfigSchema) -> Result<(), ValidationError> {
    let Some(sections) = config.as_object() else {
        return Ok(());
    };

    for (section, data) in sections {
        let Some(values) = data.as_object() else {
            continue;
        };
        for (parameter, value) in values {
            validate_value(section, parameter, value, schema)?;
        }
    }
    Ok(())
}

fn validate_boolean(value: &Value) -> Result<(), ValidationError> {
    let accepted = match value {
        Value::Bool(_) => true,
        Value::String(s) => matches!(
            s.as_str(),
            "true" | "false" | "TRUE" | "FALSE" | "1" | "0"
        ),
        Value::Number(n) => matches!(n.as_f64(), Some(x) if x == 0.0 || x == 1.0),
        _ => false,
    };

    if accepted {
        Ok(())
    } else {
        Err(ValidationError::InvalidBoolean {
            value: display_value(value),
        })
    }
}

fn validate_number(value: &Value, min: Option<i64>, max: Option<i64>) -> Result<(), ValidationError> {
    let num = to_number(value).ok_or_else(|| ValidationError::InvalidNumber {
        value: display_value(value),
    })?;

    if let Some(min) = min
        && num < min as f64
    {
        return Err(ValidationError::BelowMinimum {
            value: format_number(num),
            min,
        });
    }

    if let Some(max) = max
        && num > max as f64
    {
        return Err(ValidationError::AboveMaximum {
            value: format_number(num),
            max,
        });
    }

    Ok(())
}

fn validate_enum(value: &Value, possible_values: Option<&[String]>) -> Result<(), ValidationError> {
    let allowed = match possible_values {
        Some(values) if !values.is_empty() => values,
        _ => return Err(ValidationError::EnumWithoutValues),
    };

    let text = display_value(value);
    if allowed.contains(&text) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEnumValue {
            value: text,
            allowed: allowed.to_vec(),
        })
    }
}

/// Generic numeric coercion; `None` stands for "not a number"
fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Number(n) => n.as_f64(),
        other => coerce_number(&display_value(other)),
    }
}

/// Plain string form of a JSON value, as used in messages and enum lookups
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(x)) => format_number(x),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
