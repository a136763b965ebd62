//! Pipeline Tests - reference CFG -> schema -> JSON -> CFG
//! Exercises the public entry points the way an editor backend uses them.

use cfgschema::converter::{SkippedEntry, extract_created_time, json_to_cfg_at};
use cfgschema::schema::symbols::SymbolMapping;
use cfgschema::{
    ConfigObject, ConfigSchema, ConfigValue, ParameterType, ValidationResult, cfg_to_json,
    convert_cfg, extract_schema, json_to_cfg, parse_cfg, validate_object, validate_raw_structure,
    validate_value,
};
use chrono::NaiveDate;
use serde_json::json;

const REFERENCE: &str = "\
# Previous Emulator Configuration
# Created: 01.02.2024 10:00:00

[ConfigDialog]
# Type: Bool
# Meaning: Show dialog at startup
bShowDialog = TRUE

[System]
# Type: Int
# Possible Values: 0-100
nValue = 10
# Type: Int
# Possible Values: 0, 1, 2
nMachineType = 1
# Type: Float
fSpeed = 1.5
# Type: Bool
# Possible Values: TRUE/FALSE
bRealtime = FALSE
# Meaning: Path to the ROM image
szRomFile = rom.bin

[Sound]
# Type: Int
# Possible Values: 0-32
nVolume = 16
";

fn schema() -> ConfigSchema {
    let document = parse_cfg(REFERENCE);
    assert!(validate_raw_structure(&document));
    extract_schema(&document, &SymbolMapping::new())
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn reference_builds_expected_schema() {
        let schema = schema();
        let names: Vec<_> = schema.sections.keys().cloned().collect();
        assert_eq!(names, vec!["ConfigDialog", "System", "Sound"]);

        let dialog = schema.get_section("ConfigDialog").unwrap();
        assert_eq!(dialog.display_name, "Config Dialog");
        assert_eq!(dialog.translation_key, "configEditor.sections.ConfigDialog");

        let show = dialog.get_parameter("bShowDialog").unwrap();
        assert_eq!(show.param_type, ParameterType::Boolean);
        assert_eq!(show.default, ConfigValue::Boolean(true));
        assert_eq!(show.description, "Show dialog at startup");
        assert_eq!(show.translation_key, "configEditor.parameters.bShowDialog");
    }

    #[test]
    fn comment_annotations_drive_types() {
        let schema = schema();

        let machine = schema.get_parameter("System", "nMachineType").unwrap();
        assert_eq!(machine.param_type, ParameterType::Enum);
        assert_eq!(
            machine.possible_values,
            Some(vec!["0".to_string(), "1".to_string(), "2".to_string()])
        );

        let volume = schema.get_parameter("Sound", "nVolume").unwrap();
        assert_eq!(volume.param_type, ParameterType::Range);
        assert_eq!((volume.min, volume.max), (Some(0), Some(32)));

        let realtime = schema.get_parameter("System", "bRealtime").unwrap();
        assert_eq!(realtime.param_type, ParameterType::Boolean);
        assert_eq!(realtime.possible_values, None);
        assert_eq!(realtime.labels, None);

        let rom = schema.get_parameter("System", "szRomFile").unwrap();
        assert_eq!(rom.param_type, ParameterType::String);
        assert_eq!(rom.default, ConfigValue::from("rom.bin"));
    }

    #[test]
    fn round_trip_preserves_typed_values() {
        let schema = schema();
        let user_cfg = "\
[ConfigDialog]
bShowDialog = FALSE

[System]
nValue = 42
nMachineType = 2
fSpeed = 2.0
bRealtime = TRUE
szRomFile = custom rom.bin

[Sound]
nVolume = 7
";
        let first = cfg_to_json(user_cfg, &schema);
        let regenerated = json_to_cfg(&first, &schema, Some("1.0.0"));
        let second = cfg_to_json(&regenerated, &schema);

        assert_eq!(first, second);
        assert_eq!(first["System"]["fSpeed"], ConfigValue::Float(2.0));
        assert_eq!(first["System"]["szRomFile"], ConfigValue::from("custom rom.bin"));
    }

    #[test]
    fn round_trip_preserves_extreme_numbers() {
        let reference = "\
[Limits]
# Type: Float
fHuge = 0
# Type: Float
fLarge = 0
# Type: Float
fTiny = 0
# Type: Float
fNegative = 0
# Type: Int
nMax = 0
# Type: Int
nMin = 0
# Type: Int
nOverflow = 0
# Type: Float
fInfinite = 0
";
        let schema = extract_schema(&parse_cfg(reference), &SymbolMapping::new());
        let user_cfg = "\
[Limits]
fHuge = 12345678901234567890123.5
fLarge = 1.5e300
fTiny = 0.000000125
fNegative = -98765432109876543210.25
nMax = 9223372036854775807
nMin = -9223372036854775808
nOverflow = 99999999999999999999
fInfinite = Infinity
";
        let first = cfg_to_json(user_cfg, &schema);
        let second = cfg_to_json(&json_to_cfg(&first, &schema, None), &schema);
        assert_eq!(first, second);

        let limits = &first["Limits"];
        assert_eq!(limits["fHuge"], ConfigValue::Float(1.2345678901234568e22));
        assert_eq!(limits["fTiny"], ConfigValue::Float(1.25e-7));
        assert_eq!(limits["nMax"], ConfigValue::Integer(i64::MAX));
        assert_eq!(limits["nMin"], ConfigValue::Integer(i64::MIN));
        assert_eq!(limits["nOverflow"], ConfigValue::Float(1e20));
        assert_eq!(limits["fInfinite"], ConfigValue::Float(f64::INFINITY));
        assert!(limits.values().all(|v| !matches!(v, ConfigValue::String(_))));
    }

    #[test]
    fn unknown_entries_are_skipped_not_fatal() {
        let schema = schema();
        let user_cfg = "\
[Unknown]
foo = bar

[Sound]
nVolume = 3
nBogus = 1
";
        let conversion = convert_cfg(user_cfg, &schema);

        assert!(!conversion.config.contains_key("Unknown"));
        assert_eq!(conversion.config["Sound"]["nVolume"], ConfigValue::Integer(3));
        assert!(!conversion.config["Sound"].contains_key("nBogus"));
        assert_eq!(
            conversion.skipped,
            vec![
                SkippedEntry::Section {
                    section: "Unknown".into()
                },
                SkippedEntry::Parameter {
                    section: "Sound".into(),
                    parameter: "nBogus".into()
                },
            ]
        );

        // The logging variant returns the same partial result
        assert_eq!(cfg_to_json(user_cfg, &schema), conversion.config);
    }

    #[test]
    fn booleans_render_uppercase() {
        let schema = schema();
        let mut config = ConfigObject::new();
        config.insert(
            "ConfigDialog".into(),
            [("bShowDialog".to_string(), ConfigValue::Boolean(true))]
                .into_iter()
                .collect(),
        );

        let cfg = json_to_cfg(&config, &schema, None);
        assert!(cfg.contains("bShowDialog = TRUE"));
        assert!(!cfg.contains("bShowDialog = true"));
    }

    #[test]
    fn regeneration_follows_schema_order_and_defaults() {
        let schema = schema();
        let mut config = ConfigObject::new();
        config.insert("Sound".into(), Default::default());
        config.insert(
            "System".into(),
            [("szRomFile".to_string(), ConfigValue::from("a.rom"))]
                .into_iter()
                .collect(),
        );

        let created = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        let cfg = json_to_cfg_at(&config, &schema, Some("1.2.3"), created);

        let expected = "\
# Previous Emulator Configuration
# Generated by Previous Admin v1.2.3
# Created: 05.03.2024 07:08:09

[System]
nValue = 10
nMachineType = 1
fSpeed = 1
bRealtime = FALSE
szRomFile = a.rom

[Sound]
nVolume = 16
";
        assert_eq!(cfg, expected);
        assert!(!cfg.contains("[ConfigDialog]"));

        let header = parse_cfg(&cfg).header_comments;
        assert_eq!(extract_created_time(&header), Some(created));
    }

    #[test]
    fn header_omits_missing_version() {
        let cfg = json_to_cfg(&ConfigObject::new(), &schema(), None);
        let lines: Vec<_> = cfg.lines().collect();
        assert_eq!(lines[1], "# Generated by Previous Admin");
    }

    #[test]
    fn validation_reports_first_failure() {
        let schema = schema();

        let result = ValidationResult::from(validate_value("System", "nValue", &json!(-1), &schema));
        assert!(!result.valid);
        assert!(result.error.unwrap().contains("below minimum"));

        let config = cfg_to_json("[System]\nnValue = 50\nnMachineType = 3\n", &schema);
        let result = ValidationResult::from(validate_object(&config, &schema));
        assert_eq!(
            result.error.as_deref(),
            Some("Invalid enum value: 3. Allowed values: 0, 1, 2")
        );

        let config = cfg_to_json("[System]\nnValue = 50\nnMachineType = 2\n", &schema);
        assert!(validate_object(&config, &schema).is_ok());
    }
}
