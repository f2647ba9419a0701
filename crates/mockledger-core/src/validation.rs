use std::collections::BTreeSet;

use crate::config::DatasetConfig;
use crate::error::{Error, Result};
use crate::schema::ColumnKind;

/// Non-fatal finding reported alongside a valid config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub code: &'static str,
    pub message: String,
}

/// Check that a config can drive a generation run.
///
/// This checks:
/// - at least one column, no duplicate column names
/// - `base_size` and `money_drift_bound` are positive
/// - code and money columns have a non-zero cardinality
/// - every date column covers all replication periods
/// - output file names are plain names and never collide
///
/// Display names for unknown columns and counter cardinalities that differ
/// from `base_size` are returned as warnings.
pub fn validate_config(config: &DatasetConfig) -> Result<Vec<ConfigWarning>> {
    let schema = config.schema();
    if schema.is_empty() {
        return Err(Error::InvalidConfig("schema has no columns".to_string()));
    }
    if config.base_size == 0 {
        return Err(Error::InvalidConfig("base_size must be positive".to_string()));
    }
    if config.money_drift_bound <= 0 {
        return Err(Error::InvalidConfig(format!(
            "money_drift_bound must be positive, got {}",
            config.money_drift_bound
        )));
    }

    let mut names = BTreeSet::new();
    let mut warnings = Vec::new();
    for column in schema {
        if !names.insert(column.name.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "duplicate column name: {}",
                column.name
            )));
        }

        match column.kind {
            ColumnKind::Code | ColumnKind::Money if column.cardinality == 0 => {
                return Err(Error::InvalidConfig(format!(
                    "{} column '{}' needs a positive cardinality",
                    column.kind.as_str(),
                    column.name
                )));
            }
            ColumnKind::Date if column.cardinality < config.replication_count => {
                return Err(Error::InvalidConfig(format!(
                    "date column '{}' covers {} periods but replication_count is {}",
                    column.name, column.cardinality, config.replication_count
                )));
            }
            ColumnKind::Counter if column.cardinality != config.base_size => {
                warnings.push(ConfigWarning {
                    code: "counter_cardinality_mismatch",
                    message: format!(
                        "counter column '{}' has cardinality {} but base_size is {}",
                        column.name, column.cardinality, config.base_size
                    ),
                });
            }
            _ => {}
        }

        if column.scale.is_some() && column.kind != ColumnKind::Money {
            warnings.push(ConfigWarning {
                code: "scale_ignored",
                message: format!("scale on non-money column '{}' is ignored", column.name),
            });
        }
    }

    for key in config.display_names.keys() {
        if !names.contains(key.as_str()) {
            warnings.push(ConfigWarning {
                code: "unknown_display_name",
                message: format!("display name for unknown column '{key}'"),
            });
        }
    }

    validate_output_files(config)?;

    Ok(warnings)
}

/// The fact file and each code column's dimension file must be distinct plain
/// file names inside the output directory.
fn validate_output_files(config: &DatasetConfig) -> Result<()> {
    let fact_file = config.output.fact_file.as_str();
    check_file_name(fact_file, "fact file")?;

    let mut files = BTreeSet::from([fact_file.to_string()]);
    for column in config.schema().of_kind(ColumnKind::Code) {
        let file = config.dimension_file_name(&column.name);
        check_file_name(&file, &format!("dimension file of column '{}'", column.name))?;
        if !files.insert(file.clone()) {
            return Err(Error::InvalidConfig(format!(
                "dimension file of column '{}' collides with another output file: {file}",
                column.name
            )));
        }
    }

    Ok(())
}

fn check_file_name(name: &str, what: &str) -> Result<()> {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return Err(Error::InvalidConfig(format!(
            "{what} must be a plain file name, got '{name}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnDescriptor;

    fn config() -> DatasetConfig {
        DatasetConfig::new(
            4,
            2,
            vec![
                ColumnDescriptor::new("date", ColumnKind::Date, 2),
                ColumnDescriptor::new("balance", ColumnKind::Money, 100),
                ColumnDescriptor::new("M", ColumnKind::Code, 3),
                ColumnDescriptor::new("CA", ColumnKind::Counter, 4),
            ],
        )
    }

    #[test]
    fn accepts_well_formed_config() {
        let warnings = validate_config(&config()).expect("valid");
        assert!(warnings.is_empty());
    }

    #[test]
    fn rejects_duplicate_columns() {
        let mut config = config();
        config.columns = crate::DatasetSchema::new(vec![
            ColumnDescriptor::new("M", ColumnKind::Code, 3),
            ColumnDescriptor::new("M", ColumnKind::Code, 5),
        ]);
        let err = validate_config(&config).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate column name: M"));
    }

    #[test]
    fn rejects_short_date_palette() {
        let mut config = config();
        config.replication_count = 3;
        let err = validate_config(&config).expect_err("too few dates");
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_base_size_and_drift() {
        let mut config = config();
        config.base_size = 0;
        assert!(validate_config(&config).is_err());

        let mut config = self::config();
        config.money_drift_bound = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_empty_code_pool() {
        let mut config = config();
        config.columns = crate::DatasetSchema::new(vec![ColumnDescriptor::new(
            "GL",
            ColumnKind::Code,
            0,
        )]);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_display_name_shadowing_fact_file() {
        let mut config = config();
        config.output.fact_file = "MarketID.csv".to_string();
        config
            .display_names
            .insert("M".to_string(), "MarketID".to_string());
        let err = validate_config(&config).expect_err("fact file would be overwritten");
        assert!(err.to_string().contains("collides"));
    }

    #[test]
    fn rejects_shared_dimension_file() {
        let mut config = config();
        config.columns = crate::DatasetSchema::new(vec![
            ColumnDescriptor::new("M", ColumnKind::Code, 3),
            ColumnDescriptor::new("P", ColumnKind::Code, 3),
        ]);
        config.display_names.insert("M".to_string(), "ID".to_string());
        config.display_names.insert("P".to_string(), "ID".to_string());
        let err = validate_config(&config).expect_err("both columns map to ID.csv");
        assert!(err.to_string().contains("column 'P' collides"));
    }

    #[test]
    fn rejects_display_name_with_path_segments() {
        for label in ["../escape", "nested/ID", "win\\ID", ".."] {
            let mut config = config();
            config.display_names.insert("M".to_string(), label.to_string());
            let err = validate_config(&config).expect_err("path in display name");
            assert!(
                err.to_string().contains("plain file name"),
                "unexpected error for {label}: {err}"
            );
        }
    }

    #[test]
    fn rejects_fact_file_with_path_segments() {
        let mut config = config();
        config.output.fact_file = "../facts.csv".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn warns_on_unknown_display_name_and_counter_mismatch() {
        let mut config = config();
        config.base_size = 10;
        config
            .display_names
            .insert("XX".to_string(), "Unknown".to_string());
        let warnings = validate_config(&config).expect("valid");
        let codes: Vec<_> = warnings.iter().map(|w| w.code).collect();
        assert_eq!(codes, vec!["counter_cardinality_mismatch", "unknown_display_name"]);
    }
}
