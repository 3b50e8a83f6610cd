//! Command-line arguments.

use crate::export::ExportFormat;
use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use fixture_core::EntityKind;
use fixture_generator::{Overrides, DEFAULT_SEED};
use serde_json::Value;
use std::path::PathBuf;
use uuid::Uuid;

/// Entity kind selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityArg {
    User,
    Transaction,
    Alert,
}

impl From<EntityArg> for EntityKind {
    fn from(arg: EntityArg) -> Self {
        match arg {
            EntityArg::User => EntityKind::User,
            EntityArg::Transaction => EntityKind::Transaction,
            EntityArg::Alert => EntityKind::Alert,
        }
    }
}

/// Arguments for `generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Entity kind to generate
    #[arg(value_enum)]
    pub kind: EntityArg,

    /// Number of entities to generate
    #[arg(long, default_value = "10")]
    pub count: usize,

    /// Random seed for reproducibility
    #[arg(long, env = "FIXTURES_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Anchor for generated dates (RFC 3339, default: now)
    #[arg(long, value_name = "TIMESTAMP")]
    pub reference_time: Option<DateTime<Utc>>,

    /// Output encoding
    #[arg(long, value_enum, default_value = "jsonl")]
    pub format: ExportFormat,

    /// Output file (default: stdout)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Owner of generated transactions or alerts
    #[arg(long)]
    pub user_id: Option<Uuid>,

    /// Field override as key=value; the value is parsed as JSON, falling
    /// back to a plain string (repeatable)
    #[arg(long = "override", value_name = "KEY=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(String, Value)>,
}

impl GenerateArgs {
    /// Reject flag combinations that cannot produce valid entities.
    pub fn check(&self) -> Result<(), String> {
        if self.kind == EntityArg::User && self.user_id.is_some() {
            return Err(
                "--user-id applies to transactions and alerts; users have no owner".to_string(),
            );
        }
        Ok(())
    }

    /// Collect `--override` and `--user-id` into one override set. An
    /// explicit `--user-id` wins over a `userId` override.
    pub fn overrides(&self) -> Overrides {
        let mut overrides = Overrides::new();
        for (field, value) in &self.overrides {
            overrides.set(field.clone(), value.clone());
        }
        if let Some(user_id) = self.user_id {
            overrides.set("userId", user_id.to_string());
        }
        overrides
    }
}

/// Arguments for `scenario`.
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Scenario YAML file (default: built-in scenario)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the scenario's seed
    #[arg(long, env = "FIXTURES_SEED")]
    pub seed: Option<u64>,

    /// Directory to write dataset files to
    #[arg(long, default_value = "fixtures")]
    pub output_dir: PathBuf,

    /// Output encoding
    #[arg(long, value_enum, default_value = "jsonl")]
    pub format: ExportFormat,
}

/// Parse a `key=value` override.
pub fn parse_override(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty override key in '{s}'"));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    #[test]
    fn test_parse_override_json_values() {
        assert_eq!(
            parse_override("riskScore=5").unwrap(),
            ("riskScore".to_string(), json!(5))
        );
        assert_eq!(
            parse_override("read=true").unwrap(),
            ("read".to_string(), json!(true))
        );
        assert_eq!(
            parse_override("expiresAt=null").unwrap(),
            ("expiresAt".to_string(), Value::Null)
        );
        assert_eq!(
            parse_override(r#"riskReasons=["velocity"]"#).unwrap(),
            ("riskReasons".to_string(), json!(["velocity"]))
        );
    }

    #[test]
    fn test_parse_override_plain_string() {
        assert_eq!(
            parse_override("severity=critical").unwrap(),
            ("severity".to_string(), json!("critical"))
        );
        assert_eq!(
            parse_override("title=a=b").unwrap(),
            ("title".to_string(), json!("a=b"))
        );
    }

    #[test]
    fn test_parse_override_rejects_malformed() {
        assert!(parse_override("severity").is_err());
        assert!(parse_override("=critical").is_err());
    }

    #[derive(Parser)]
    struct GenerateCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(argv: &[&str]) -> GenerateArgs {
        GenerateCli::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_user_id_rejected_for_users() {
        let id = Uuid::nil().to_string();

        let args = parse(&["generate", "user", "--user-id", &id]);
        let message = args.check().unwrap_err();
        assert!(message.contains("--user-id"));

        assert!(parse(&["generate", "alert", "--user-id", &id]).check().is_ok());
        assert!(parse(&["generate", "transaction", "--user-id", &id]).check().is_ok());
        assert!(parse(&["generate", "user"]).check().is_ok());
    }

    #[test]
    fn test_parse_generate_flags() {
        let args = parse(&[
            "generate",
            "alert",
            "--count",
            "3",
            "--seed",
            "7",
            "--format",
            "yaml",
            "--override",
            "riskScore=5",
            "--override",
            "severity=critical",
        ]);

        assert_eq!(args.kind, EntityArg::Alert);
        assert_eq!(args.count, 3);
        assert_eq!(args.seed, 7);
        assert_eq!(args.format, ExportFormat::Yaml);
        assert_eq!(args.overrides().get("riskScore"), Some(&json!(5)));
    }

    #[test]
    fn test_user_id_wins() {
        let user_id = Uuid::nil();
        let args = GenerateArgs {
            kind: EntityArg::Alert,
            count: 1,
            seed: DEFAULT_SEED,
            reference_time: None,
            format: ExportFormat::Jsonl,
            output: None,
            user_id: Some(user_id),
            overrides: vec![
                ("userId".to_string(), json!("someone-else")),
                ("read".to_string(), json!(true)),
            ],
        };

        let overrides = args.overrides();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("userId"), Some(&json!(user_id.to_string())));
    }
}
