mod registry;

use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use mockledger_core::{DatasetConfig, Error as CoreError, dataset_config_json_schema, validate_config};
use mockledger_generate::{GenerateOptions, GenerationEngine, GenerationError};
use registry::{RunConfig, init_logging, write_run_config};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("config error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mockledger", version, about = "Mock account-balance dataset generator")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the fact and dimension files.
    Generate(GenerateArgs),
    /// Load and validate a config without generating anything.
    Validate(ValidateArgs),
    /// Print the JSON Schema of the config document.
    Schema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Dataset config (.json or .toml).
    #[arg(long, value_name = "PATH")]
    config: PathBuf,
    /// Output directory, overriding the config.
    #[arg(long)]
    out: Option<PathBuf>,
    /// RNG seed, overriding the config.
    #[arg(long)]
    seed: Option<u64>,
    /// First day of the series (YYYY-MM-DD), overriding the config.
    #[arg(long, value_name = "DATE")]
    start_date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Dataset config (.json or .toml).
    #[arg(long, value_name = "PATH")]
    config: PathBuf,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args, cli.verbose),
        Command::Validate(args) => run_validate(args, cli.verbose),
        Command::Schema => print_schema(),
    }
}

fn run_generate(args: GenerateArgs, verbose: bool) -> Result<(), CliError> {
    let GenerateArgs {
        config: config_path,
        out,
        seed,
        start_date,
    } = args;

    let config = DatasetConfig::from_path(&config_path)?;
    validate_config(&config)?;

    let engine = GenerationEngine::new(GenerateOptions {
        out_dir: out,
        seed,
        start_date,
    });
    let out_dir = engine.resolve_out_dir(&config);

    std::fs::create_dir_all(&out_dir)?;
    init_logging(verbose, Some(&out_dir.join("logs.ndjson")))?;

    tracing::info!(
        event = "run_started",
        config = %config_path.display(),
        out_dir = %out_dir.display()
    );
    let timer = Instant::now();

    let result = engine.run(&config)?;

    let run_config = RunConfig::new(
        &config_path,
        &config,
        &result.out_dir,
        &result.report,
        chrono::Utc::now(),
    );
    let run_config_path = write_run_config(&result.out_dir, &run_config)?;
    tracing::info!(event = "run_config_written", path = %run_config_path.display());

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "run_finished", status = "success", duration_ms = duration_ms);

    println!(
        "wrote {} rows ({} periods, seed {}) to {}",
        result.report.rows_total,
        result.report.periods,
        result.report.seed,
        result.out_dir.display()
    );

    Ok(())
}

fn run_validate(args: ValidateArgs, verbose: bool) -> Result<(), CliError> {
    init_logging(verbose, None)?;

    let config = DatasetConfig::from_path(&args.config)?;
    let warnings = validate_config(&config)?;
    for warning in &warnings {
        println!("warning [{}]: {}", warning.code, warning.message);
    }

    println!(
        "{}: {} columns, {} rows per period, {} periods, {} rows total",
        args.config.display(),
        config.schema().len(),
        config.base_size,
        config.replication_count + 1,
        config.total_rows()
    );

    Ok(())
}

fn print_schema() -> Result<(), CliError> {
    let schema = dataset_config_json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_overrides() {
        let cli = Cli::try_parse_from([
            "mockledger",
            "generate",
            "--config",
            "configs/account_balances.json",
            "--seed",
            "42",
            "--start-date",
            "2015-09-01",
        ])
        .expect("parse args");

        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.start_date, NaiveDate::from_ymd_opt(2015, 9, 1));
        assert!(args.out.is_none());
    }

    #[test]
    fn invalid_config_leaves_no_output_directory() {
        let root = std::env::temp_dir().join(format!(
            "mockledger_cli_invalid_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&root).expect("create temp dir");
        let config_path = root.join("config.json");
        std::fs::write(
            &config_path,
            r#"{"base_size": 0, "replication_count": 0, "columns": [{"name": "M", "kind": "code", "cardinality": 2}]}"#,
        )
        .expect("write config");
        let out = root.join("out");

        let args = GenerateArgs {
            config: config_path,
            out: Some(out.clone()),
            seed: None,
            start_date: None,
        };
        let err = run_generate(args, false).expect_err("base_size 0 is invalid");
        assert!(matches!(err, CliError::Core(_)));
        assert!(!out.exists());
    }

    #[test]
    fn rejects_malformed_start_date() {
        let result = Cli::try_parse_from([
            "mockledger",
            "generate",
            "--config",
            "c.json",
            "--start-date",
            "09/01/2015",
        ]);
        assert!(result.is_err());
    }
}
