//! Core contracts for mockledger.
//!
//! This crate defines the dataset configuration (column schema, display names,
//! output location) and the validation applied before any generation runs.

pub mod config;
pub mod error;
pub mod schema;
pub mod validation;

pub use config::{
    DEFAULT_MONEY_DRIFT_BOUND, DatasetConfig, OutputConfig, dataset_config_json_schema,
};
pub use error::{Error, Result};
pub use schema::{ColumnDescriptor, ColumnKind, DatasetSchema};
pub use validation::{ConfigWarning, validate_config};
