use std::path::Path;

use crate::data::loader::load_table;
use crate::data::metrics::calculate_metrics;
use crate::data::model::RowOutcome;
use crate::data::validate::validate_columns;
use crate::error::Result;

/// Load `path`, check its columns, and compute one outcome per row.
///
/// Only file-level problems are returned as errors; bad rows come back as
/// error records inside the list.
pub fn load_and_compute(path: &Path) -> Result<Vec<RowOutcome>> {
    let table = load_table(path)?;
    validate_columns(&table)?;
    let outcomes = calculate_metrics(&table);
    log::debug!(
        "{} rows computed, {} failed",
        outcomes.len(),
        outcomes.iter().filter(|o| o.is_error()).count()
    );
    Ok(outcomes)
}
