use std::collections::BTreeMap;
use std::fmt;

use crate::error::RowComputeError;
use crate::units::format_number;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the input table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring what CSV/XLSX/JSON can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{}", format_number(*v)),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Guess the type of a raw text cell (CSV, JSON strings stay strings).
    pub fn from_text(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Interpret the cell as a float, the way a numeric column is read.
    ///
    /// Text is trimmed before parsing; booleans count as 1/0. `nan` and
    /// `inf` are not numbers a measurement can take and are rejected.
    pub fn to_f64(&self, column: &str) -> Result<f64, RowComputeError> {
        let not_numeric = || RowComputeError::NotNumeric {
            column: column.to_string(),
            value: self.to_string(),
        };
        let value = match self {
            CellValue::Float(v) => *v,
            CellValue::Integer(i) => *i as f64,
            CellValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            CellValue::String(s) => s.trim().parse::<f64>().map_err(|_| not_numeric())?,
            CellValue::Null => {
                return Err(RowComputeError::MissingValue {
                    column: column.to_string(),
                })
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(not_numeric())
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the loaded input file
// ---------------------------------------------------------------------------

/// One input row: column name → value. Absent keys read as missing.
pub type Row = BTreeMap<String, CellValue>;

/// The whole input file, row-oriented, with the header kept separately so
/// the schema can be checked before any row is read.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Column names in file order.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Derived records
// ---------------------------------------------------------------------------

/// Safety classification of the desired temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    OverheatingRisk,
    FreezingRisk,
    Normal,
}

impl Alert {
    pub fn as_str(self) -> &'static str {
        match self {
            Alert::OverheatingRisk => "Overheating Risk",
            Alert::FreezingRisk => "Freezing Risk",
            Alert::Normal => "Normal",
        }
    }

    /// Badge shown next to the label by the front ends.
    pub fn icon(self) -> &'static str {
        match self {
            Alert::OverheatingRisk => "⚠️",
            Alert::FreezingRisk => "❄️",
            Alert::Normal => "✅",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerTip {
    ReduceTarget,
    Efficient,
}

impl PowerTip {
    pub fn as_str(self) -> &'static str {
        match self {
            PowerTip::ReduceTarget => "Consider reducing target temp to save battery.",
            PowerTip::Efficient => "Efficient usage.",
        }
    }
}

impl fmt::Display for PowerTip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column names of a [`MetricsRecord`], in field order.
pub const METRICS_COLUMNS: [&str; 10] = [
    "Liquid Type",
    "Initial Temperature",
    "Desired Temperature",
    "Ambient Temperature",
    "Battery Level",
    "Time to Target",
    "Power Usage",
    "Alert",
    "Power Saving Tip",
    "User Preference",
];

/// Metrics derived from one well-formed input row. Temperatures are in °C.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRecord {
    pub liquid_type: String,
    pub initial_temperature: f64,
    pub desired_temperature: f64,
    pub ambient_temperature: f64,
    pub battery_level: f64,
    /// Minutes.
    pub time_to_target: f64,
    /// Percent of battery.
    pub power_usage: f64,
    pub alert: Alert,
    pub power_tip: PowerTip,
    pub user_preference: String,
}

impl MetricsRecord {
    /// `(column, value)` pairs in [`METRICS_COLUMNS`] order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.liquid_type.clone(),
            format_number(self.initial_temperature),
            format_number(self.desired_temperature),
            format_number(self.ambient_temperature),
            format_number(self.battery_level),
            format_number(self.time_to_target),
            format_number(self.power_usage),
            self.alert.to_string(),
            self.power_tip.to_string(),
            self.user_preference.clone(),
        ];
        METRICS_COLUMNS.into_iter().zip(values).collect()
    }
}

/// What is left of a row whose metrics could not be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    pub liquid_type: String,
    pub error: String,
}

impl ErrorRecord {
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Liquid Type", self.liquid_type.clone()),
            ("Error", self.error.clone()),
        ]
    }
}

/// Per-row result: metrics on success, an error record otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Metrics(MetricsRecord),
    Error(ErrorRecord),
}

impl RowOutcome {
    pub fn liquid_type(&self) -> &str {
        match self {
            RowOutcome::Metrics(m) => &m.liquid_type,
            RowOutcome::Error(e) => &e.liquid_type,
        }
    }

    pub fn as_metrics(&self) -> Option<&MetricsRecord> {
        match self {
            RowOutcome::Metrics(m) => Some(m),
            RowOutcome::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RowOutcome::Error(_))
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            RowOutcome::Metrics(m) => m.fields(),
            RowOutcome::Error(e) => e.fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_cells_are_typed() {
        assert_eq!(CellValue::from_text(""), CellValue::Null);
        assert_eq!(CellValue::from_text("20"), CellValue::Integer(20));
        assert_eq!(CellValue::from_text("20.5"), CellValue::Float(20.5));
        assert_eq!(CellValue::from_text("true"), CellValue::Bool(true));
        assert_eq!(
            CellValue::from_text("Tea"),
            CellValue::String("Tea".to_string())
        );
    }

    #[test]
    fn numeric_text_is_trimmed() {
        let cell = CellValue::String(" 42.5 ".to_string());
        assert_eq!(cell.to_f64("Battery Level"), Ok(42.5));
    }

    #[test]
    fn null_and_garbage_report_the_column() {
        assert_eq!(
            CellValue::Null.to_f64("Ambient Temperature"),
            Err(RowComputeError::MissingValue {
                column: "Ambient Temperature".to_string()
            })
        );
        let err = CellValue::String("hot".to_string())
            .to_f64("Initial Temperature")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not convert 'hot' in 'Initial Temperature' to float"
        );
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        for text in ["nan", "inf", "-Infinity"] {
            let cell = CellValue::from_text(text);
            assert!(matches!(
                cell.to_f64("Battery Level"),
                Err(RowComputeError::NotNumeric { .. })
            ));
        }
        assert!(CellValue::String(" inf ".into()).to_f64("Battery Level").is_err());
        assert!(CellValue::Float(f64::NAN).to_f64("Battery Level").is_err());
    }

    #[test]
    fn float_cells_display_with_a_decimal() {
        assert_eq!(CellValue::Float(20.0).to_string(), "20.0");
        assert_eq!(CellValue::Integer(20).to_string(), "20");
        assert_eq!(CellValue::Null.to_string(), "");
    }
}
