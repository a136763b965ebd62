//! Command-line surface over the schema pipeline
//!
//! Every command returns its output as text so the binary only has to
//! print it and pick an exit code.

use crate::config::ToolConfig;
use crate::converter::{cfg_to_json, json_to_cfg};
use crate::infrastructure::{
    FileSystemSchemaSource, SchemaSource, build_schema, build_schema_from_text,
};
use crate::schema::{self, parse_symbol_mapping, symbols::SymbolMapping};
use crate::storage;
use crate::types::{ConfigSchema, ValidationResult};
use crate::validator::validate_json;
use anyhow::{Context, bail};
use std::path::{Path, PathBuf};

/// A parsed command line
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: String,
    pub input: PathBuf,
    pub options: CliOptions,
}

/// Flags shared by all commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub reference: Option<PathBuf>,
    pub symbols: Option<PathBuf>,
    pub app_version: Option<String>,
    pub config: Option<PathBuf>,
}

/// Result of running a command
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }
}

pub const COMMANDS: &[&str] = &["schema", "check", "to-json", "to-cfg", "validate"];

/// Parse `<command> <input> [flags]`
pub fn parse_args(args: &[String]) -> anyhow::Result<Invocation> {
    let Some(command) = args.first() else {
        bail!("Missing command");
    };
    if !COMMANDS.contains(&command.as_str()) {
        bail!("Unknown command '{command}'");
    }

    let mut input = None;
    let mut options = CliOptions::default();
    let mut rest = args[1..].iter();

    while let Some(arg) = rest.next() {
        let mut value = || {
            rest.next()
                .cloned()
                .with_context(|| format!("Missing value for {arg}"))
        };

        match arg.as_str() {
            "--reference" | "-r" => options.reference = Some(PathBuf::from(value()?)),
            "--symbols" | "-s" => options.symbols = Some(PathBuf::from(value()?)),
            "--app-version" => options.app_version = Some(value()?),
            "--config" | "-c" => options.config = Some(PathBuf::from(value()?)),
            flag if flag.starts_with('-') => bail!("Unknown option '{flag}'"),
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => bail!("Unexpected argument '{extra}'"),
        }
    }

    let input = input.with_context(|| format!("Missing input file for '{command}'"))?;
    Ok(Invocation {
        command: command.clone(),
        input,
        options,
    })
}

/// Resolve the tool configuration: file, then environment, then flags
pub fn resolve_config(options: &CliOptions) -> anyhow::Result<ToolConfig> {
    let mut config = match &options.config {
        Some(path) => {
            let text = read_file(path)?;
            let file: ToolConfig = serde_json::from_str(&text)
                .with_context(|| format!("Invalid configuration file {}", path.display()))?;
            file.with_env()
        }
        None => ToolConfig::from_env(),
    };

    if let Some(reference) = &options.reference {
        config.reference_path = reference.clone();
    }
    if let Some(symbols) = &options.symbols {
        config.symbol_mapping_path = Some(symbols.clone());
    }
    if let Some(version) = &options.app_version {
        config.app_version = Some(version.clone());
    }
    Ok(config)
}

/// Run a parsed invocation
pub async fn run(invocation: &Invocation) -> anyhow::Result<Outcome> {
    let config = resolve_config(&invocation.options)?;
    let input = &invocation.input;

    match invocation.command.as_str() {
        "schema" => {
            let (schema, _) = schema_from_reference(input, &config).await?;
            Ok(Outcome::ok(String::from_utf8(storage::save_schema(&schema)?)?))
        }
        "check" => {
            let (schema, mapping) = schema_from_reference(input, &config).await?;
            let result = schema::check(&schema, &mapping);
            let output = if result.warnings.is_empty() {
                "No issues found".to_string()
            } else {
                result
                    .warnings
                    .iter()
                    .map(|w| format!("warning: {w}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            Ok(Outcome::ok(output))
        }
        "to-json" => {
            let schema = reference_schema(&config).await?;
            let config_object = cfg_to_json(&read_file(input)?, &schema);
            Ok(Outcome::ok(String::from_utf8(storage::save_config(
                &config_object,
            )?)?))
        }
        "to-cfg" => {
            let schema = reference_schema(&config).await?;
            let config_object = storage::load_config(read_file(input)?.as_bytes())?;
            Ok(Outcome::ok(json_to_cfg(
                &config_object,
                &schema,
                config.app_version.as_deref(),
            )))
        }
        "validate" => {
            let schema = reference_schema(&config).await?;
            let value: serde_json::Value = serde_json::from_str(&read_file(input)?)
                .with_context(|| format!("Invalid JSON in {}", input.display()))?;
            let result = ValidationResult::from(validate_json(&value, &schema));
            Ok(Outcome {
                success: result.valid,
                output: serde_json::to_string_pretty(&result)?,
            })
        }
        other => bail!("Unknown command '{other}'"),
    }
}

fn source_for(reference: &Path, config: &ToolConfig) -> FileSystemSchemaSource {
    let source = FileSystemSchemaSource::new(reference);
    match &config.symbol_mapping_path {
        Some(path) => source.with_symbol_mapping(path),
        None => source,
    }
}

/// Build the reference schema named by the configuration
async fn reference_schema(config: &ToolConfig) -> anyhow::Result<ConfigSchema> {
    let source = source_for(&config.reference_path, config);
    build_schema(&source)
        .await
        .context("Failed to build reference schema")
}

async fn schema_from_reference(
    reference: &Path,
    config: &ToolConfig,
) -> anyhow::Result<(ConfigSchema, SymbolMapping)> {
    let source = source_for(reference, config);
    let mapping = match source.load_symbol_mapping().await? {
        Some(text) => parse_symbol_mapping(&text)?,
        None => SymbolMapping::new(),
    };
    let schema = build_schema_from_text(&source.load_reference().await?, &mapping)?;
    Ok((schema, mapping))
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}
