use rand::Rng;

use mockledger_core::{ColumnKind, DatasetSchema};

use crate::base::{BaseTable, Row};
use crate::errors::GenerationError;
use crate::palette::Palette;
use crate::value::CellValue;

/// Build the replica for period `offset` (1-based) from a copy of the base table.
///
/// Date columns take the palette date at `offset`. Money columns grow by an
/// independent draw from `[0, drift_bound)` on top of the base value, so
/// periods do not compound. Code and counter values stay as generated.
pub fn replicate(
    base: &BaseTable,
    schema: &DatasetSchema,
    palette: &Palette,
    offset: u64,
    drift_bound: i64,
    rng: &mut impl Rng,
) -> Result<Vec<Row>, GenerationError> {
    if drift_bound <= 0 {
        return Err(GenerationError::InvalidDriftBound(drift_bound));
    }

    let mut rows = base.rows().to_vec();
    for (position, column) in schema.iter().enumerate() {
        match column.kind {
            ColumnKind::Date => {
                let date = palette.date_at(&column.name, offset)?;
                for row in &mut rows {
                    let cell = cell_mut(row, position, &column.name, "a date")?;
                    *cell = date.clone();
                }
            }
            ColumnKind::Money => {
                for row in &mut rows {
                    let cell = cell_mut(row, position, &column.name, "an integer")?;
                    let CellValue::Integer(value) = cell else {
                        return Err(GenerationError::CellMismatch {
                            column: column.name.clone(),
                            position,
                            expected: "an integer",
                        });
                    };
                    *value = value.saturating_add(rng.random_range(0..drift_bound));
                }
            }
            ColumnKind::Code | ColumnKind::Counter => {}
        }
    }

    Ok(rows)
}

fn cell_mut<'a>(
    row: &'a mut Row,
    position: usize,
    column: &str,
    expected: &'static str,
) -> Result<&'a mut CellValue, GenerationError> {
    row.get_mut(position)
        .ok_or_else(|| GenerationError::CellMismatch {
            column: column.to_string(),
            position,
            expected,
        })
}
