use rand::Rng;
use rand::seq::IndexedRandom;

use mockledger_core::{ColumnDescriptor, ColumnKind, DatasetSchema};

use crate::errors::GenerationError;
use crate::palette::Palette;
use crate::value::CellValue;

/// One generated row, positionally aligned with the schema.
pub type Row = Vec<CellValue>;

/// Rows of the first day. Replicas are built from copies, never in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseTable {
    rows: Vec<Row>,
}

impl BaseTable {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

/// Generate `base_size` rows for period 0.
pub fn generate_base_table(
    schema: &DatasetSchema,
    palette: &Palette,
    base_size: u64,
    rng: &mut impl Rng,
) -> Result<BaseTable, GenerationError> {
    let mut rows = Vec::with_capacity(usize::try_from(base_size).unwrap_or_default());
    for row_index in 0..base_size {
        let mut row = Vec::with_capacity(schema.len());
        for column in schema {
            row.push(base_value(column, palette, row_index, rng)?);
        }
        rows.push(row);
    }
    Ok(BaseTable { rows })
}

fn base_value(
    column: &ColumnDescriptor,
    palette: &Palette,
    row_index: u64,
    rng: &mut impl Rng,
) -> Result<CellValue, GenerationError> {
    match column.kind {
        ColumnKind::Code => palette
            .pool(&column.name)?
            .choose(rng)
            .cloned()
            .ok_or_else(|| GenerationError::EmptyPalette(column.name.clone())),
        ColumnKind::Date => palette.date_at(&column.name, 0).cloned(),
        ColumnKind::Money => {
            let upper = i64::try_from(column.cardinality).unwrap_or(i64::MAX);
            if upper <= 0 {
                return Err(GenerationError::EmptyMoneyRange(column.name.clone()));
            }
            Ok(CellValue::Integer(rng.random_range(0..upper)))
        }
        ColumnKind::Counter => Ok(CellValue::Text(format!("{}{row_index}", column.name))),
    }
}
