//! CFG <-> typed JSON conversion
//!
//! The schema decides how each value is coerced when reading CFG text and
//! the order in which sections and parameters are written back.

use crate::numeric::{parse_float_prefix, parse_int_prefix};
use crate::parser;
use crate::types::{ConfigObject, ConfigSchema, ConfigValue, ParameterType, SectionValues};
use chrono::{Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// First header line of every generated file
pub const PRODUCT_HEADER: &str = "# Previous Emulator Configuration";

/// Tool name used in the "Generated by" header line
pub const GENERATOR_NAME: &str = "Previous Admin";

/// An entry of the CFG text that the schema does not know
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SkippedEntry {
    Section { section: String },
    Parameter { section: String, parameter: String },
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section { section } => write!(f, "Section not found in schema: {section}"),
            Self::Parameter { section, parameter } => {
                write!(f, "Parameter not found in schema: {section}.{parameter}")
            }
        }
    }
}

/// Outcome of reading CFG text: the typed values plus everything skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversion {
    pub config: ConfigObject,
    pub skipped: Vec<SkippedEntry>,
}

/// Convert CFG text to a typed configuration object
///
/// Unknown sections and parameters are skipped with a warning.
pub fn cfg_to_json(text: &str, schema: &ConfigSchema) -> ConfigObject {
    let conversion = convert_cfg(text, schema);
    for entry in &conversion.skipped {
        log::warn!("{entry}");
    }
    conversion.config
}

/// Convert CFG text and report what was skipped instead of logging it
pub fn convert_cfg(text: &str, schema: &ConfigSchema) -> Conversion {
    let document = parser::parse(text);
    let mut conversion = Conversion::default();

    for section in &document.sections {
        let Some(section_schema) = schema.get_section(&section.name) else {
            conversion.skipped.push(SkippedEntry::Section {
                section: section.name.clone(),
            });
            continue;
        };

        let mut values = SectionValues::new();
        for param in &section.parameters {
            match section_schema.get_parameter(&param.name) {
                Some(param_schema) => {
                    values.insert(
                        param.name.clone(),
                        convert_value(&param.value, param_schema.param_type),
                    );
                }
                None => conversion.skipped.push(SkippedEntry::Parameter {
                    section: section.name.clone(),
                    parameter: param.name.clone(),
                }),
            }
        }

        conversion.config.insert(section.name.clone(), values);
    }

    conversion
}

/// Coerce a raw CFG value to the parameter type
///
/// Booleans are true for `TRUE` in any case, `1` or `true`. Numbers with a
/// `.` are read as floats, others as base-10 integers, or as floats when
/// they do not fit in an `i64`. Text without a numeric prefix is kept as a
/// string so nothing is lost.
pub fn convert_value(raw: &str, param_type: ParameterType) -> ConfigValue {
    let value = raw.trim();

    match param_type {
        ParameterType::Boolean => {
            ConfigValue::Boolean(value.to_uppercase() == "TRUE" || value == "1" || value == "true")
        }
        ParameterType::Number | ParameterType::Range => {
            let number = if value.contains('.') {
                parse_float_prefix(value).map(ConfigValue::Float)
            } else {
                parse_int_prefix(value, false)
                    .map(ConfigValue::Integer)
                    .or_else(|| parse_float_prefix(value).map(ConfigValue::Float))
            };
            number.unwrap_or_else(|| ConfigValue::String(value.to_string()))
        }
        ParameterType::Enum | ParameterType::String => ConfigValue::String(value.to_string()),
    }
}

/// Render a configuration object as CFG text, stamped with the local time
pub fn json_to_cfg(config: &ConfigObject, schema: &ConfigSchema, app_version: Option<&str>) -> String {
    json_to_cfg_at(config, schema, app_version, Local::now().naive_local())
}

/// Render a configuration object as CFG text with an explicit creation time
///
/// Sections and parameters follow schema order. Sections absent from the
/// configuration are left out; parameters absent from a present section
/// are written with their default.
pub fn json_to_cfg_at(
    config: &ConfigObject,
    schema: &ConfigSchema,
    app_version: Option<&str>,
    created: NaiveDateTime,
) -> String {
    let mut lines = vec![
        PRODUCT_HEADER.to_string(),
        match app_version {
            Some(version) => format!("# Generated by {GENERATOR_NAME} v{version}"),
            None => format!("# Generated by {GENERATOR_NAME}"),
        },
        format!("# Created: {}", created.format("%d.%m.%Y %H:%M:%S")),
        String::new(),
    ];

    for section in schema.sections.values() {
        let Some(values) = config.get(&section.name) else {
            continue;
        };

        lines.push(format!("[{}]", section.name));
        for param in &section.parameters {
            let value = values.get(&param.name).unwrap_or(&param.default);
            lines.push(format!("{} = {}", param.name, value.to_cfg_string()));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn created_regex() -> &'static Regex {
    static CREATED: OnceLock<Regex> = OnceLock::new();
    CREATED.get_or_init(|| {
        Regex::new(r"Created:\s+(\d{2})\.(\d{2})\.(\d{4})\s+(\d{2}):(\d{2}):(\d{2})")
            .expect("created pattern is valid")
    })
}

/// Read the local creation time from a `Created: DD.MM.YYYY HH:MM:SS` header
pub fn extract_created_time(header_comments: &[String]) -> Option<NaiveDateTime> {
    header_comments.iter().find_map(|comment| {
        let caps = created_regex().captures(comment)?;
        let field = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();

        NaiveDate::from_ymd_opt(field(3)? as i32, field(2)?, field(1)?)?
            .and_hms_opt(field(4)?, field(5)?, field(6)?)
    })
}

/// Creation time from the header as an ISO-8601 UTC timestamp
///
/// `# Created: 05.01.2026 16:23:57` is read in local time and rendered like
/// `2026-01-05T15:23:57.000Z` (for a UTC+1 host).
pub fn extract_created_date(header_comments: &[String]) -> Option<String> {
    let local = extract_created_time(header_comments)?;
    let instant = Local.from_local_datetime(&local).earliest()?;
    Some(
        instant
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}
