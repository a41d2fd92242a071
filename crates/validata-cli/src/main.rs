mod catalog;
mod logging;
mod report;
mod settings;

use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use uuid::Uuid;
use validata_core::{Error as CoreError, Validator, Value};

use logging::init_logging;
use settings::{LogFormat, OutputFormat, SETTINGS_FILE, Settings, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown schema '{0}' (run `validata schemas` to list them)")]
    UnknownSchema(String),
    #[error("input does not match schema '{schema}' ({errors} error(s))")]
    Rejected { schema: String, errors: usize },
}

#[derive(Parser, Debug)]
#[command(name = "validata", version, about = "Validata CLI")]
struct Cli {
    /// Settings file.
    #[arg(long, global = true, default_value = SETTINGS_FILE)]
    config: PathBuf,
    /// Log level filter, overrides the settings file.
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Log output format, overrides the settings file.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
    /// Report format, overrides the settings file.
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in schemas.
    Schemas,
    /// Validate a JSON document against a built-in schema.
    Check(CheckArgs),
    /// Validate every built-in sample document.
    Demo,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Built-in schema name.
    #[arg(long)]
    schema: String,
    /// JSON input file; reads stdin when omitted.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    init_logging(&settings)?;

    let run_id = Uuid::new_v4().to_string();
    let timer = Instant::now();
    tracing::info!(event = "run_started", run_id = %run_id);

    let outcome = match cli.command {
        Command::Schemas => {
            list_schemas();
            Ok(())
        }
        Command::Check(args) => run_check(args, &settings),
        Command::Demo => run_demo(&settings),
    };

    let status = if outcome.is_ok() { "success" } else { "failure" };
    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "run_finished", run_id = %run_id, status, duration_ms = duration_ms);

    outcome
}

fn resolve_settings(cli: &Cli) -> Result<Settings, CliError> {
    let mut settings = load_settings(&cli.config)?;
    if let Some(level) = &cli.log_level {
        settings.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        settings.log_format = format;
    }
    if let Some(output) = cli.output {
        settings.output = output;
    }
    Ok(settings)
}

fn list_schemas() {
    let width = catalog::names().map(str::len).max().unwrap_or(0);
    for entry in catalog::catalog() {
        println!("{:<width$}  {}", entry.name, entry.summary);
    }
}

fn run_check(args: CheckArgs, settings: &Settings) -> Result<(), CliError> {
    let entry =
        catalog::find(&args.schema).ok_or_else(|| CliError::UnknownSchema(args.schema.clone()))?;
    let schema = (entry.build)()?;

    let content = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let input: serde_json::Value = serde_json::from_str(&content)?;

    tracing::info!(event = "validation_started", schema = entry.name);
    let result = schema.validate(&Value::from(input));
    tracing::info!(
        event = "validation_finished",
        schema = entry.name,
        success = result.success,
        errors = result.errors.len()
    );

    println!("{}", report::render(&result, settings.output)?);

    if result.success {
        Ok(())
    } else {
        Err(CliError::Rejected {
            schema: entry.name.to_string(),
            errors: result.errors.len(),
        })
    }
}

fn run_demo(settings: &Settings) -> Result<(), CliError> {
    let mut mismatches = Vec::new();

    for entry in catalog::catalog() {
        let schema = (entry.build)()?;
        let valid = schema.validate(&Value::from((entry.valid_sample)()));
        let invalid = schema.validate(&Value::from((entry.invalid_sample)()));

        println!("== {} ({})", entry.name, entry.summary);
        println!(
            "valid sample: {}",
            if valid.success { "accepted" } else { "rejected" }
        );
        println!("invalid sample: {}", report::render(&invalid, settings.output)?);

        tracing::debug!(
            event = "demo_schema_checked",
            schema = entry.name,
            valid_accepted = valid.success,
            invalid_errors = invalid.errors.len()
        );

        if !valid.success || invalid.success {
            mismatches.push(entry.name);
        }
    }

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(CliError::InvalidConfig(format!(
            "sample outcomes did not match for: {}",
            mismatches.join(", ")
        )))
    }
}
