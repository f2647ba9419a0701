use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use schemars::JsonSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::{ColumnDescriptor, DatasetSchema};

/// Exclusive upper bound of the per-period money drift when none is configured.
pub const DEFAULT_MONEY_DRIFT_BOUND: i64 = 20;

/// Declarative description of a mock dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DatasetConfig {
    /// Rows generated for the first day.
    pub base_size: u64,
    /// Number of later days derived from the first one.
    pub replication_count: u64,
    /// Money columns grow by `[0, money_drift_bound)` per replica.
    #[serde(default = "default_money_drift_bound")]
    pub money_drift_bound: i64,
    /// Ordered column descriptors.
    pub columns: DatasetSchema,
    /// Output header label per column name.
    #[serde(default)]
    pub display_names: BTreeMap<String, String>,
    #[serde(default)]
    pub output: OutputConfig,
    /// Seed for every random draw; a random one is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Date of the first day; the local current date when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

/// Where generated files land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_fact_file")]
    pub fact_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            fact_file: default_fact_file(),
        }
    }
}

fn default_money_drift_bound() -> i64 {
    DEFAULT_MONEY_DRIFT_BOUND
}

fn default_directory() -> PathBuf {
    PathBuf::from("out")
}

fn default_fact_file() -> String {
    "account_balances.csv".to_string()
}

impl DatasetConfig {
    pub fn new(base_size: u64, replication_count: u64, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            base_size,
            replication_count,
            money_drift_bound: DEFAULT_MONEY_DRIFT_BOUND,
            columns: DatasetSchema::new(columns),
            display_names: BTreeMap::new(),
            output: OutputConfig::default(),
            seed: None,
            start_date: None,
        }
    }

    /// Load a config from a `.json` or `.toml` file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            Some("toml") => Self::from_toml_str(&contents),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn schema(&self) -> &DatasetSchema {
        &self.columns
    }

    /// Header label for a column, falling back to its name.
    pub fn display_name<'a>(&'a self, column: &'a str) -> &'a str {
        self.display_names
            .get(column)
            .map(String::as_str)
            .unwrap_or(column)
    }

    /// File name of a code column's dimension file inside the output directory.
    pub fn dimension_file_name(&self, column: &str) -> String {
        format!("{}.csv", self.display_name(column))
    }

    /// Total rows across period 0 and every replica.
    pub fn total_rows(&self) -> u64 {
        self.base_size
            .saturating_mul(self.replication_count.saturating_add(1))
    }
}

/// JSON Schema for the config document.
pub fn dataset_config_json_schema() -> RootSchema {
    schema_for!(DatasetConfig)
}
