use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use mockledger_core::DatasetConfig;
use mockledger_generate::GenerationReport;

use super::{RegistryError, RegistryResult};

/// Effective config of a finished run, written next to its output so the run
/// can be repeated with the same seed, start date and output directory.
#[derive(Debug, Serialize)]
pub struct RunConfig<'a> {
    pub run_id: &'a str,
    pub finished_at: String,
    pub source: &'a Path,
    pub config: DatasetConfig,
}

impl<'a> RunConfig<'a> {
    pub fn new(
        source: &'a Path,
        config: &DatasetConfig,
        out_dir: &Path,
        report: &'a GenerationReport,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let mut config = config.clone();
        config.seed = Some(report.seed);
        config.start_date = Some(report.start_date);
        config.output.directory = out_dir.to_path_buf();
        Self {
            run_id: &report.run_id,
            finished_at: finished_at.to_rfc3339(),
            source,
            config,
        }
    }
}

pub fn write_run_config(out_dir: &Path, run_config: &RunConfig<'_>) -> RegistryResult<PathBuf> {
    let path = out_dir.join("run_config.json");
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&path)?;
    serde_json::to_writer_pretty(file, run_config).map_err(RegistryError::from)?;
    Ok(path)
}
