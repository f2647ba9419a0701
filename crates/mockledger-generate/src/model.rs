use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Run-level overrides applied on top of the dataset config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory for generated files; the config's output directory when unset.
    pub out_dir: Option<PathBuf>,
    /// Seed override.
    pub seed: Option<u64>,
    /// First-day override.
    pub start_date: Option<NaiveDate>,
}

/// What a written file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Fact,
    Dimension,
}

/// Summary of one written file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub kind: FileKind,
    pub path: PathBuf,
    /// Data rows, header excluded.
    pub rows: u64,
    pub bytes: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub start_date: NaiveDate,
    pub base_size: u64,
    pub replication_count: u64,
    pub periods: u64,
    pub rows_total: u64,
    pub files: Vec<FileReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
    pub warnings: Vec<String>,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, start_date: NaiveDate) -> Self {
        Self {
            run_id,
            seed,
            start_date,
            base_size: 0,
            replication_count: 0,
            periods: 0,
            rows_total: 0,
            files: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
            warnings: Vec::new(),
        }
    }

    pub fn record_file(&mut self, kind: FileKind, path: PathBuf, rows: u64, bytes: u64) {
        self.bytes_written = self.bytes_written.saturating_add(bytes);
        self.files.push(FileReport {
            kind,
            path,
            rows,
            bytes,
        });
    }

    pub fn record_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}
