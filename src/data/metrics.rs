use super::model::{Alert, CellValue, ErrorRecord, MetricsRecord, PowerTip, Row, RowOutcome, Table};
use crate::error::RowComputeError;
use crate::units::round_to;

// ---------------------------------------------------------------------------
// Estimation constants
// ---------------------------------------------------------------------------

const MINUTES_PER_DEGREE: f64 = 0.5;
const POWER_PER_DEGREE: f64 = 0.8;

/// Above this ambient temperature heating is faster and cheaper.
const HOT_AMBIENT: f64 = 30.0;
const HOT_TIME_FACTOR: f64 = 0.9;
const HOT_POWER_FACTOR: f64 = 0.85;

/// Below this ambient temperature heating is slower and wastes power.
const COLD_AMBIENT: f64 = 10.0;
const COLD_TIME_FACTOR: f64 = 1.2;
const COLD_POWER_FACTOR: f64 = 1.1;

const OVERHEATING_ABOVE: f64 = 90.0;
const FREEZING_BELOW: f64 = 0.0;
const HIGH_POWER_ABOVE: f64 = 40.0;

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

/// Compute one outcome per row, in row order. A failing row becomes an
/// [`ErrorRecord`] and the remaining rows are still processed.
pub fn calculate_metrics(table: &Table) -> Vec<RowOutcome> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let outcome = compute_row(row);
            if let RowOutcome::Error(e) = &outcome {
                log::warn!("Row {i} ({}): {}", e.liquid_type, e.error);
            }
            outcome
        })
        .collect()
}

/// Turn a single input row into metrics, or an error record.
pub fn compute_row(row: &Row) -> RowOutcome {
    match try_compute_row(row) {
        Ok(record) => RowOutcome::Metrics(record),
        Err(err) => RowOutcome::Error(ErrorRecord {
            liquid_type: liquid_type_or_unknown(row),
            error: err.to_string(),
        }),
    }
}

fn try_compute_row(row: &Row) -> Result<MetricsRecord, RowComputeError> {
    let initial = numeric(row, "Initial Temperature")?;
    let desired = numeric(row, "Desired Temperature")?;
    let ambient = numeric(row, "Ambient Temperature")?;
    let battery = numeric(row, "Battery Level")?;

    let (time_to_target, power_usage) = estimate(initial, desired, ambient);

    Ok(MetricsRecord {
        liquid_type: text(row, "Liquid Type"),
        initial_temperature: initial,
        desired_temperature: desired,
        ambient_temperature: ambient,
        battery_level: battery,
        time_to_target,
        power_usage,
        alert: classify_alert(desired),
        power_tip: power_tip(power_usage),
        user_preference: text(row, "User Preference"),
    })
}

// ---------------------------------------------------------------------------
// Formulas
// ---------------------------------------------------------------------------

/// `(minutes, percent)` needed to go from `initial` to `desired`, adjusted
/// for the ambient bracket and rounded half away from zero to 2 decimals.
pub fn estimate(initial: f64, desired: f64, ambient: f64) -> (f64, f64) {
    let temp_diff = (desired - initial).abs();
    let mut time = temp_diff * MINUTES_PER_DEGREE;
    let mut power = temp_diff * POWER_PER_DEGREE;

    if ambient > HOT_AMBIENT {
        time *= HOT_TIME_FACTOR;
        power *= HOT_POWER_FACTOR;
    } else if ambient < COLD_AMBIENT {
        time *= COLD_TIME_FACTOR;
        power *= COLD_POWER_FACTOR;
    }

    (round_to(time, 2), round_to(power, 2))
}

pub fn classify_alert(desired: f64) -> Alert {
    if desired > OVERHEATING_ABOVE {
        Alert::OverheatingRisk
    } else if desired < FREEZING_BELOW {
        Alert::FreezingRisk
    } else {
        Alert::Normal
    }
}

pub fn power_tip(power_usage: f64) -> PowerTip {
    if power_usage > HIGH_POWER_ABOVE {
        PowerTip::ReduceTarget
    } else {
        PowerTip::Efficient
    }
}

// ---------------------------------------------------------------------------
// Cell access
// ---------------------------------------------------------------------------

fn numeric(row: &Row, column: &str) -> Result<f64, RowComputeError> {
    row.get(column).unwrap_or(&CellValue::Null).to_f64(column)
}

fn text(row: &Row, column: &str) -> String {
    row.get(column).map(|v| v.to_string()).unwrap_or_default()
}

fn liquid_type_or_unknown(row: &Row) -> String {
    match row.get("Liquid Type") {
        Some(v) if !v.is_null() => v.to_string(),
        _ => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn row(liquid: &str, initial: f64, desired: f64, ambient: f64, battery: f64) -> Row {
        let mut r = Row::new();
        r.insert("Liquid Type".into(), CellValue::String(liquid.into()));
        r.insert("Initial Temperature".into(), CellValue::Float(initial));
        r.insert("Desired Temperature".into(), CellValue::Float(desired));
        r.insert("Ambient Temperature".into(), CellValue::Float(ambient));
        r.insert("Battery Level".into(), CellValue::Float(battery));
        r.insert("Time to Target".into(), CellValue::Null);
        r.insert("User Preference".into(), CellValue::String("Hot".into()));
        r
    }

    fn metrics(outcome: RowOutcome) -> MetricsRecord {
        match outcome {
            RowOutcome::Metrics(m) => m,
            RowOutcome::Error(e) => panic!("unexpected error record: {}", e.error),
        }
    }

    #[test]
    fn hot_tea_scenario() {
        let m = metrics(compute_row(&row("Tea", 20.0, 95.0, 35.0, 80.0)));
        assert_eq!(m.liquid_type, "Tea");
        assert_eq!(m.time_to_target, 33.75);
        assert_eq!(m.power_usage, 51.0);
        assert_eq!(m.alert, Alert::OverheatingRisk);
        assert_eq!(m.power_tip, PowerTip::ReduceTarget);
        assert_eq!(m.battery_level, 80.0);
        assert_eq!(m.user_preference, "Hot");
    }

    #[test]
    fn neutral_ambient_leaves_base_estimate() {
        // diff 30: 15 min, 24 %
        assert_eq!(estimate(20.0, 50.0, 20.0), (15.0, 24.0));
        // boundaries themselves are neutral
        assert_eq!(estimate(20.0, 50.0, 30.0), (15.0, 24.0));
        assert_eq!(estimate(20.0, 50.0, 10.0), (15.0, 24.0));
    }

    #[test]
    fn cold_ambient_slows_and_wastes() {
        let (time, power) = estimate(50.0, 20.0, 5.0);
        assert_relative_eq!(time, 18.0);
        assert_relative_eq!(power, 26.4);
    }

    #[test]
    fn direction_does_not_matter() {
        assert_eq!(estimate(80.0, 4.0, 22.0), estimate(4.0, 80.0, 22.0));
    }

    #[test]
    fn alert_boundaries() {
        assert_eq!(classify_alert(90.0), Alert::Normal);
        assert_eq!(classify_alert(90.01), Alert::OverheatingRisk);
        assert_eq!(classify_alert(0.0), Alert::Normal);
        assert_eq!(classify_alert(-0.01), Alert::FreezingRisk);
    }

    #[test]
    fn tip_threshold_is_exclusive() {
        assert_eq!(power_tip(40.0), PowerTip::Efficient);
        assert_eq!(power_tip(40.01), PowerTip::ReduceTarget);
    }

    #[test]
    fn bad_row_is_contained() {
        let mut bad = row("Coffee", 20.0, 60.0, 22.0, 50.0);
        bad.insert(
            "Initial Temperature".into(),
            CellValue::String("warm".into()),
        );
        let table = Table::new(
            Vec::new(),
            vec![bad, row("Tea", 20.0, 95.0, 35.0, 80.0)],
        );

        let out = calculate_metrics(&table);
        assert_eq!(out.len(), 2);
        match &out[0] {
            RowOutcome::Error(e) => {
                assert_eq!(e.liquid_type, "Coffee");
                assert!(e.error.contains("warm"));
            }
            other => panic!("expected error record, got {other:?}"),
        }
        assert!(!out[1].is_error());
    }

    #[test]
    fn infinite_temperature_is_an_error_row() {
        let mut r = row("Soup", 20.0, 60.0, 22.0, 50.0);
        r.insert("Desired Temperature".into(), CellValue::from_text("inf"));
        let out = calculate_metrics(&Table::new(Vec::new(), vec![r]));
        assert!(out[0].is_error());
        assert_eq!(out[0].liquid_type(), "Soup");
    }

    #[test]
    fn missing_liquid_type_defaults_to_unknown() {
        let mut bad = row("x", 1.0, 2.0, 3.0, 4.0);
        bad.remove("Liquid Type");
        bad.insert("Battery Level".into(), CellValue::Null);
        match compute_row(&bad) {
            RowOutcome::Error(e) => {
                assert_eq!(e.liquid_type, "Unknown");
                assert_eq!(e.error, "missing value for 'Battery Level'");
            }
            other => panic!("expected error record, got {other:?}"),
        }
    }

    #[test]
    fn numeric_text_cells_are_parsed() {
        let mut r = row("Milk", 0.0, 0.0, 0.0, 0.0);
        r.insert("Initial Temperature".into(), CellValue::String("4".into()));
        r.insert("Desired Temperature".into(), CellValue::Integer(-6));
        let m = metrics(compute_row(&r));
        assert_eq!(m.initial_temperature, 4.0);
        assert_eq!(m.alert, Alert::FreezingRisk);
        // diff 10, cold ambient: 5 * 1.2, 8 * 1.1
        assert_eq!(m.time_to_target, 6.0);
        assert_eq!(m.power_usage, 8.8);
    }
}
