//! Schema-driven generation of mock account-balance datasets.
//!
//! Builds value palettes from the column schema, generates the first day's
//! rows, replicates them across the configured horizon and writes the fact
//! and dimension files as CSV.

pub mod assemble;
pub mod base;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod palette;
pub mod replicate;
pub mod value;

pub use assemble::{Dataset, GeneratorContext, ResultSet, assemble_dataset};
pub use base::{BaseTable, Row, generate_base_table};
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{FileKind, FileReport, GenerateOptions, GenerationReport};
pub use palette::Palette;
pub use replicate::replicate;
pub use value::CellValue;
