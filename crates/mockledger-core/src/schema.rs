use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a column's values are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Drawn from a pool of `{name}{index}` identifiers.
    #[serde(alias = "CODE")]
    Code,
    /// One calendar date per period, starting at the generation date.
    #[serde(alias = "DATE")]
    Date,
    /// Random integer balance that drifts upward in every replica.
    #[serde(alias = "MONEY")]
    Money,
    /// `{name}{row_index}`, unique within a period.
    #[serde(alias = "COUNTER")]
    Counter,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Code => "code",
            ColumnKind::Date => "date",
            ColumnKind::Money => "money",
            ColumnKind::Counter => "counter",
        }
    }
}

/// A single typed column of the generated table.
///
/// `cardinality` depends on the kind: pool size for codes, number of
/// replication periods for dates, exclusive upper bound of the day-0 value for
/// money. Counters ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnDescriptor {
    pub name: String,
    pub kind: ColumnKind,
    pub cardinality: u64,
    /// Implied decimal places when rendering money values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, kind: ColumnKind, cardinality: u64) -> Self {
        Self {
            name: name.into(),
            kind,
            cardinality,
            scale: None,
        }
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// Ordered column set. Column order is row order everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct DatasetSchema {
    columns: Vec<ColumnDescriptor>,
}

impl DatasetSchema {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDescriptor> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    /// Lookup that treats a miss as an error.
    pub fn require(&self, name: &str) -> Result<&ColumnDescriptor> {
        self.column(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Columns of the given kind, in schema order.
    pub fn of_kind(&self, kind: ColumnKind) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(move |column| column.kind == kind)
    }
}

impl<'a> IntoIterator for &'a DatasetSchema {
    type Item = &'a ColumnDescriptor;
    type IntoIter = std::slice::Iter<'a, ColumnDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> DatasetSchema {
        DatasetSchema::new(vec![
            ColumnDescriptor::new("date", ColumnKind::Date, 2),
            ColumnDescriptor::new("balance", ColumnKind::Money, 100),
            ColumnDescriptor::new("M", ColumnKind::Code, 3),
        ])
    }

    #[test]
    fn lookup_by_name() {
        let schema = schema();
        assert_eq!(schema.column("M").map(|c| c.kind), Some(ColumnKind::Code));
        assert_eq!(schema.position("balance"), Some(1));
        assert!(schema.column("missing").is_none());
    }

    #[test]
    fn require_reports_not_found() {
        let err = schema().require("GL").expect_err("should miss");
        assert!(matches!(err, Error::ColumnNotFound(name) if name == "GL"));
    }

    #[test]
    fn kind_accepts_upper_case_alias() {
        let kind: ColumnKind = serde_json::from_str("\"COUNTER\"").expect("parse alias");
        assert_eq!(kind, ColumnKind::Counter);
        let kind: ColumnKind = serde_json::from_str("\"money\"").expect("parse kind");
        assert_eq!(kind, ColumnKind::Money);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = serde_json::from_str::<ColumnKind>("\"PERCENT\"");
        assert!(result.is_err());
    }
}
