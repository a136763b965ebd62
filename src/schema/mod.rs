//! Schema extraction from parsed CFG documents
//!
//! Types, bounds, enum values, defaults and descriptions are inferred from
//! the comment block above each parameter. When a `Possible Values:`
//! annotation gives a signal it overrides the `Type:` annotation, except
//! for a boolean whose listed values are exactly TRUE and FALSE.

pub mod annotations;
pub mod check;
pub mod symbols;

use crate::numeric::parse_int_prefix;
use crate::types::{
    ConfigSchema, ConfigValue, ParameterSchema, ParameterType, RawDocument, RawParameter,
    RawSection, SectionSchema,
};
use annotations::{Annotations, ValuesSignal};
use symbols::{SymbolMapping, resolve_symbol};

pub use check::{CheckResult, SchemaWarning, check};
pub use symbols::parse_symbol_mapping;

/// Build a typed schema from a parsed reference document
pub fn extract(document: &RawDocument, symbol_mapping: &SymbolMapping) -> ConfigSchema {
    let mut schema = ConfigSchema::new();

    for section in &document.sections {
        schema.insert(extract_section(section, symbol_mapping));
    }

    log::debug!(
        "Extracted schema with {} sections and {} parameters",
        schema.len(),
        schema.parameter_count()
    );
    schema
}

fn extract_section(section: &RawSection, symbol_mapping: &SymbolMapping) -> SectionSchema {
    SectionSchema {
        name: section.name.clone(),
        display_name: to_display_name(&section.name),
        translation_key: format!("configEditor.sections.{}", section.name),
        sf_symbol: resolve_symbol(&section.name, symbol_mapping),
        description: None,
        parameters: section.parameters.iter().map(extract_parameter).collect(),
    }
}

/// Infer the schema of a single parameter from its comments and raw value
pub fn extract_parameter(raw: &RawParameter) -> ParameterSchema {
    let notes = Annotations::scan(&raw.comments);
    let declared = notes.declared_type();
    let (mut param_type, listed) = resolve_type(declared, notes.values_signal());

    // A range is only usable with both bounds
    let bounds = match param_type {
        ParameterType::Range => annotations::range_bounds(&raw.comments),
        _ => None,
    };
    if param_type == ParameterType::Range && bounds.is_none() {
        log::debug!("No usable bounds for '{}', keeping declared type", raw.name);
        param_type = declared;
    }

    let default_source = notes
        .default
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(raw.value.as_str());

    let mut param = ParameterSchema::new(
        raw.name.as_str(),
        param_type,
        coerce_default(default_source, param_type),
    )
    .with_description(notes.meaning.unwrap_or_default());
    param.display_name = Some(parameter_display_name(&raw.name));

    if let Some((values, labels)) = listed {
        param = param.with_values(values, labels);
    }

    if let Some((min, max)) = bounds {
        param = param.with_bounds(Some(min), Some(max));
    }

    param
}

/// Combine the declared type with the possible-values signal
fn resolve_type(
    declared: ParameterType,
    signal: Option<ValuesSignal>,
) -> (ParameterType, Option<(Vec<String>, Vec<String>)>) {
    match signal {
        Some(ref s) if declared == ParameterType::Boolean && s.is_true_false_pair() => {
            (ParameterType::Boolean, None)
        }
        Some(ValuesSignal::Range) => (ParameterType::Range, None),
        Some(ValuesSignal::Enum { values, labels }) => {
            (ParameterType::Enum, Some((values, labels)))
        }
        None => (declared, None),
    }
}

/// Coerce a default's text to the parameter type
///
/// Booleans are true only for `TRUE` in any case; numbers take the leading
/// integer and fall back to zero.
pub fn coerce_default(raw: &str, param_type: ParameterType) -> ConfigValue {
    match param_type {
        ParameterType::Boolean => ConfigValue::Boolean(raw.to_uppercase() == "TRUE"),
        ParameterType::Number | ParameterType::Range => {
            ConfigValue::Integer(parse_int_prefix(raw, true).unwrap_or(0))
        }
        ParameterType::Enum | ParameterType::String => ConfigValue::String(raw.to_string()),
    }
}

/// Insert a space before every uppercase letter: `ConfigDialog` -> `Config Dialog`
pub fn to_display_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

/// Display name of a parameter, without its lowercase type prefix
///
/// `bShowConfigDialogAtStartup` -> `Show Config Dialog At Startup`
pub fn parameter_display_name(name: &str) -> String {
    match name.find(|c: char| c.is_ascii_uppercase()) {
        Some(start) if start > 0 && name[..start].chars().all(|c| c.is_ascii_lowercase()) => {
            to_display_name(&name[start..])
        }
        _ => to_display_name(name),
    }
}
