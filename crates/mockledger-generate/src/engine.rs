use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use rand::Rng;
use tracing::{info, warn};

use mockledger_core::{ColumnKind, DatasetConfig, validate_config};

use crate::assemble::assemble_dataset;
use crate::errors::GenerationError;
use crate::model::{FileKind, GenerateOptions, GenerationReport};
use crate::output::csv::{write_dimension_csv, write_fact_csv};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating a dataset from a config.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Seed for this run: option, then config, then a fresh random one.
    pub fn resolve_seed(&self, config: &DatasetConfig) -> u64 {
        self.options
            .seed
            .or(config.seed)
            .unwrap_or_else(|| rand::rng().random())
    }

    /// First day for this run: option, then config, then today.
    pub fn resolve_start_date(&self, config: &DatasetConfig) -> NaiveDate {
        self.options
            .start_date
            .or(config.start_date)
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn resolve_out_dir(&self, config: &DatasetConfig) -> PathBuf {
        self.options
            .out_dir
            .clone()
            .unwrap_or_else(|| config.output.directory.clone())
    }

    /// Generate the dataset and write the fact file, dimension files and report.
    pub fn run(&self, config: &DatasetConfig) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();

        let warnings = validate_config(config)?;
        let seed = self.resolve_seed(config);
        let start_date = self.resolve_start_date(config);
        let out_dir = self.resolve_out_dir(config);

        let mut report = GenerationReport::new(run_id.clone(), seed, start_date);
        report.base_size = config.base_size;
        report.replication_count = config.replication_count;
        for warning in warnings {
            warn!(run_id = %run_id, code = warning.code, "{}", warning.message);
            report.record_warning(warning.message);
        }

        info!(
            run_id = %run_id,
            seed,
            start_date = %start_date,
            base_size = config.base_size,
            replication_count = config.replication_count,
            columns = config.schema().len(),
            "generation started"
        );

        let dataset = assemble_dataset(config, start_date, seed)?;
        report.periods = dataset.result.periods();
        report.rows_total = dataset.result.len() as u64;
        info!(
            run_id = %run_id,
            periods = report.periods,
            rows = report.rows_total,
            "dataset assembled"
        );

        std::fs::create_dir_all(&out_dir)?;

        let fact_path = out_dir.join(&config.output.fact_file);
        let bytes = write_fact_csv(&fact_path, config, dataset.result.rows())?;
        info!(path = %fact_path.display(), rows = report.rows_total, bytes, "fact file written");
        report.record_file(FileKind::Fact, fact_path, report.rows_total, bytes);

        for column in config.schema().of_kind(ColumnKind::Code) {
            let values = dataset.palette.pool(&column.name)?;
            let header = config.display_name(&column.name);
            let path = out_dir.join(config.dimension_file_name(&column.name));
            let bytes = write_dimension_csv(&path, header, column, values)?;
            info!(
                column = %column.name,
                path = %path.display(),
                rows = values.len(),
                bytes,
                "dimension file written"
            );
            report.record_file(FileKind::Dimension, path, values.len() as u64, bytes);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        let report_path = out_dir.join("generation_report.json");
        std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;

        info!(
            run_id = %run_id,
            files = report.files.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { out_dir, report })
    }
}
