use chrono::NaiveDate;

use mockledger_core::{ColumnDescriptor, ColumnKind};

/// Generated value for a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
}

impl CellValue {
    /// Plain string form used in the output files.
    pub fn to_csv(&self, column: &ColumnDescriptor) -> String {
        match self {
            CellValue::Text(value) => value.clone(),
            CellValue::Integer(value) => match column.scale {
                Some(scale) if scale > 0 && column.kind == ColumnKind::Money => {
                    format_scaled(*value, scale)
                }
                _ => value.to_string(),
            },
            CellValue::Date(value) => value.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(value) => Some(*value),
            _ => None,
        }
    }
}

fn format_scaled(value: i64, scale: u32) -> String {
    let Some(divisor) = 10_i128.checked_pow(scale) else {
        return value.to_string();
    };
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = i128::from(value).abs();
    format!(
        "{sign}{}.{:0width$}",
        magnitude / divisor,
        magnitude % divisor,
        width = scale as usize
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_renders_unscaled_by_default() {
        let column = ColumnDescriptor::new("balance", ColumnKind::Money, 100);
        assert_eq!(CellValue::Integer(4021).to_csv(&column), "4021");
    }

    #[test]
    fn money_renders_with_scale() {
        let column = ColumnDescriptor::new("balance", ColumnKind::Money, 100).with_scale(2);
        assert_eq!(CellValue::Integer(100230).to_csv(&column), "1002.30");
        assert_eq!(CellValue::Integer(7).to_csv(&column), "0.07");
        assert_eq!(CellValue::Integer(-105).to_csv(&column), "-1.05");
    }

    #[test]
    fn dates_render_iso() {
        let column = ColumnDescriptor::new("date", ColumnKind::Date, 1);
        let date = NaiveDate::from_ymd_opt(2015, 9, 1).expect("valid date");
        assert_eq!(CellValue::Date(date).to_csv(&column), "2015-09-01");
    }
}
