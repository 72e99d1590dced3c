use super::model::RowOutcome;
use crate::error::FilterInputError;

// ---------------------------------------------------------------------------
// Filter predicate: liquid type and maximum heating time
// ---------------------------------------------------------------------------

/// Active filters. `None` (or a blank drink type) means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Matched case-insensitively against the whole liquid type.
    pub drink_type: Option<String>,
    /// Inclusive upper bound on time to target, in minutes.
    pub max_time: Option<f64>,
}

impl FilterCriteria {
    pub fn new(drink_type: Option<String>, max_time: Option<f64>) -> Self {
        Self {
            drink_type,
            max_time,
        }
    }

    /// Whether a single outcome passes.
    ///
    /// * An error record always passes, so failures stay visible.
    /// * A metrics record passes when both the drink type and the time limit
    ///   are either unset or satisfied.
    pub fn accepts(&self, outcome: &RowOutcome) -> bool {
        let record = match outcome {
            RowOutcome::Error(_) => return true,
            RowOutcome::Metrics(m) => m,
        };

        if let Some(drink) = self.drink_type.as_deref().map(str::trim) {
            if !drink.is_empty() && record.liquid_type.to_lowercase() != drink.to_lowercase() {
                return false;
            }
        }
        if let Some(max) = self.max_time {
            if record.time_to_target > max {
                return false;
            }
        }
        true
    }
}

/// Return the outcomes that pass `criteria`, keeping input order.
pub fn apply_filters(outcomes: &[RowOutcome], criteria: &FilterCriteria) -> Vec<RowOutcome> {
    outcomes
        .iter()
        .filter(|o| criteria.accepts(o))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Parsing user-typed filter values
// ---------------------------------------------------------------------------

/// Blank input skips the filter; anything else must be a number.
pub fn parse_max_time(input: &str) -> Result<Option<f64>, FilterInputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse::<f64>()
        .map(Some)
        .map_err(|_| FilterInputError::InvalidMaxTime(input.to_string()))
}

/// Blank input skips the filter; otherwise only letters and spaces.
pub fn parse_drink_type(input: &str) -> Result<Option<String>, FilterInputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    if input.chars().all(|c| c.is_alphabetic() || c == ' ') {
        Ok(Some(input.to_string()))
    } else {
        Err(FilterInputError::InvalidDrinkType(input.to_string()))
    }
}
