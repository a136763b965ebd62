//! CLI Tests - command dispatch over files in a temporary directory

use cfgschema::cli::{CliOptions, Invocation, parse_args, run};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const REFERENCE: &str = "\
[System]
# Type: Int
# Possible Values: 0-100
nValue = 10
# Type: Int
# Possible Values: 0=Cube, 1=Station
nMachine = 0
";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let workspace = Self {
            dir: TempDir::new().expect("temp dir"),
        };
        workspace.write("reference.cfg", REFERENCE);
        workspace
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    fn invocation(&self, command: &str, input: PathBuf) -> Invocation {
        Invocation {
            command: command.to_string(),
            input,
            options: CliOptions {
                reference: Some(self.dir.path().join("reference.cfg")),
                app_version: Some("3.1.0".to_string()),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[tokio::test]
    async fn to_json_emits_typed_values() {
        let ws = Workspace::new();
        let input = ws.write("user.cfg", "[System]\nnValue = 42\nnMachine = 1\n");

        let outcome = run(&ws.invocation("to-json", input)).await.unwrap();
        assert!(outcome.success);

        let value: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(value["System"]["nValue"], 42);
        assert_eq!(value["System"]["nMachine"], "1");
    }

    #[tokio::test]
    async fn to_cfg_stamps_version() {
        let ws = Workspace::new();
        let input = ws.write("user.json", r#"{"System": {"nValue": 5}}"#);

        let outcome = run(&ws.invocation("to-cfg", input)).await.unwrap();
        assert!(outcome.output.contains("# Generated by Previous Admin v3.1.0"));
        assert!(outcome.output.contains("[System]\nnValue = 5\nnMachine = 0\n"));
    }

    #[tokio::test]
    async fn validate_flags_invalid_config() {
        let ws = Workspace::new();
        let input = ws.write("user.json", r#"{"System": {"nValue": 101}}"#);

        let outcome = run(&ws.invocation("validate", input)).await.unwrap();
        assert!(!outcome.success);
        assert!(outcome.output.contains("Number 101 is above maximum: 100"));
    }

    #[tokio::test]
    async fn schema_and_check_read_the_input_reference() {
        let ws = Workspace::new();
        let reference = ws.dir.path().join("reference.cfg");

        let outcome = run(&ws.invocation("schema", reference.clone())).await.unwrap();
        let schema: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(schema["sections"]["System"]["parameters"][1]["type"], "enum");
        assert_eq!(
            schema["sections"]["System"]["parameters"][1]["labels"],
            serde_json::json!(["Cube", "Station"])
        );

        let outcome = run(&ws.invocation("check", reference)).await.unwrap();
        assert_eq!(outcome.output, "No issues found");
    }

    #[tokio::test]
    async fn missing_input_is_an_error() {
        let ws = Workspace::new();
        let result = run(&ws.invocation("to-json", ws.dir.path().join("absent.cfg"))).await;
        assert!(result.is_err());
    }

    #[test]
    fn arguments_parse_into_invocation() {
        let args: Vec<String> = ["validate", "cfg.json", "-r", "ref.cfg", "-s", "icons.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let invocation = parse_args(&args).unwrap();
        assert_eq!(invocation.command, "validate");
        assert_eq!(invocation.options.symbols, Some(PathBuf::from("icons.txt")));
    }
}
