use super::model::Table;
use crate::error::SchemaError;

/// Columns every input file must carry, exact name and case.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Liquid Type",
    "Initial Temperature",
    "Desired Temperature",
    "Ambient Temperature",
    "Time to Target",
    "Battery Level",
    "User Preference",
];

/// Check that every required column is present. Nothing about the rows is
/// inspected; this runs before any metrics are computed.
pub fn validate_columns(table: &Table) -> Result<(), SchemaError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !table.has_column(col))
        .map(|col| col.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(SchemaError { missing });
    }
    log::info!("Data validated. All required columns are present.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(columns: &[&str]) -> Table {
        Table::new(columns.iter().map(|c| c.to_string()).collect(), Vec::new())
    }

    #[test]
    fn all_columns_pass() {
        assert_eq!(validate_columns(&table_with(&REQUIRED_COLUMNS)), Ok(()));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let mut cols = REQUIRED_COLUMNS.to_vec();
        cols.push("Notes");
        assert!(validate_columns(&table_with(&cols)).is_ok());
    }

    #[test]
    fn lists_exactly_the_missing_column() {
        let cols: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| *c != "Battery Level")
            .collect();
        let err = validate_columns(&table_with(&cols)).unwrap_err();
        assert_eq!(err.missing, vec!["Battery Level"]);
        assert_eq!(err.to_string(), "Missing required columns: Battery Level");
    }

    #[test]
    fn several_missing_are_comma_joined_in_required_order() {
        let err = validate_columns(&table_with(&["User Preference", "Liquid Type"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required columns: Initial Temperature,Desired Temperature,\
             Ambient Temperature,Time to Target,Battery Level"
        );
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let mut cols = REQUIRED_COLUMNS.to_vec();
        cols[0] = "liquid type";
        let err = validate_columns(&table_with(&cols)).unwrap_err();
        assert_eq!(err.missing, vec!["Liquid Type"]);
    }
}
