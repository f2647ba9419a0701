use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use mockledger_core::{ColumnKind, DatasetSchema};

use crate::errors::GenerationError;
use crate::value::CellValue;

/// Read-only value pools for code and date columns, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    pools: BTreeMap<String, Vec<CellValue>>,
}

impl Palette {
    /// Build one pool per pooled column. Money and counter columns get none.
    pub fn build(schema: &DatasetSchema, start_date: NaiveDate) -> Result<Self, GenerationError> {
        let mut pools = BTreeMap::new();
        for column in schema {
            let pool = match column.kind {
                ColumnKind::Code => code_pool(&column.name, column.cardinality),
                ColumnKind::Date => date_pool(&column.name, start_date, column.cardinality)?,
                ColumnKind::Money | ColumnKind::Counter => continue,
            };
            pools.insert(column.name.clone(), pool);
        }
        Ok(Self { pools })
    }

    pub fn get(&self, column: &str) -> Option<&[CellValue]> {
        self.pools.get(column).map(Vec::as_slice)
    }

    pub fn pool(&self, column: &str) -> Result<&[CellValue], GenerationError> {
        self.get(column)
            .ok_or_else(|| GenerationError::MissingPalette(column.to_string()))
    }

    /// Date for a period offset; offset 0 is the first day.
    pub fn date_at(&self, column: &str, offset: u64) -> Result<&CellValue, GenerationError> {
        let pool = self.pool(column)?;
        usize::try_from(offset)
            .ok()
            .and_then(|index| pool.get(index))
            .ok_or_else(|| GenerationError::DateOutOfRange {
                column: column.to_string(),
                offset,
            })
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CellValue])> {
        self.pools
            .iter()
            .map(|(name, pool)| (name.as_str(), pool.as_slice()))
    }
}

/// `{name}0` through `{name}{cardinality - 1}`, in index order.
pub fn code_pool(name: &str, cardinality: u64) -> Vec<CellValue> {
    (0..cardinality)
        .map(|index| CellValue::Text(format!("{name}{index}")))
        .collect()
}

/// `periods + 1` consecutive days starting at `start`.
pub fn date_pool(
    name: &str,
    start: NaiveDate,
    periods: u64,
) -> Result<Vec<CellValue>, GenerationError> {
    (0..=periods)
        .map(|offset| {
            start
                .checked_add_days(Days::new(offset))
                .map(CellValue::Date)
                .ok_or_else(|| GenerationError::DateOverflow(name.to_string()))
        })
        .collect()
}
