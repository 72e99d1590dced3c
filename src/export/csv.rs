use std::io::Write;
use std::path::Path;

use crate::data::model::{RowOutcome, METRICS_COLUMNS};
use crate::error::{Result, SmartTempError};

/// Header for a result set: the metrics columns, plus `Error` when any row
/// failed.
pub fn header_for(outcomes: &[RowOutcome]) -> Vec<&'static str> {
    let mut header = METRICS_COLUMNS.to_vec();
    if outcomes.iter().any(RowOutcome::is_error) {
        header.push("Error");
    }
    header
}

/// Write `outcomes` as CSV with a header row. Cells a record does not carry
/// are left empty.
pub fn write_csv<W: Write>(writer: W, outcomes: &[RowOutcome]) -> Result<()> {
    let header = header_for(outcomes);
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&header)?;

    for outcome in outcomes {
        let fields = outcome.fields();
        let record: Vec<&str> = header
            .iter()
            .map(|col| {
                fields
                    .iter()
                    .find(|(name, _)| name == col)
                    .map(|(_, value)| value.as_str())
                    .unwrap_or("")
            })
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export to a file. An empty result set is refused rather than writing a
/// bare header.
pub fn export_csv(path: &Path, outcomes: &[RowOutcome]) -> Result<()> {
    if outcomes.is_empty() {
        return Err(SmartTempError::NoResults);
    }
    let file = std::fs::File::create(path)?;
    write_csv(file, outcomes)?;
    log::info!("Exported {} rows to {}", outcomes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Alert, ErrorRecord, MetricsRecord, PowerTip};

    fn tea() -> RowOutcome {
        RowOutcome::Metrics(MetricsRecord {
            liquid_type: "Tea".into(),
            initial_temperature: 20.0,
            desired_temperature: 95.0,
            ambient_temperature: 35.0,
            battery_level: 80.0,
            time_to_target: 33.75,
            power_usage: 51.0,
            alert: Alert::OverheatingRisk,
            power_tip: PowerTip::ReduceTarget,
            user_preference: "Hot, strong".into(),
        })
    }

    fn to_string(outcomes: &[RowOutcome]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, outcomes).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn metrics_only_has_no_error_column() {
        let text = to_string(&[tea()]);
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Liquid Type,Initial Temperature,Desired Temperature,Ambient Temperature,\
             Battery Level,Time to Target,Power Usage,Alert,Power Saving Tip,User Preference"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Tea,20.0,95.0,35.0,80.0,33.75,51.0,Overheating Risk,\
             Consider reducing target temp to save battery.,\"Hot, strong\""
        );
    }

    #[test]
    fn error_rows_fill_only_their_fields() {
        let err = RowOutcome::Error(ErrorRecord {
            liquid_type: "Milk".into(),
            error: "missing value for 'Battery Level'".into(),
        });
        let text = to_string(&[tea(), err]);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].ends_with(",User Preference,Error"));
        assert!(lines[1].ends_with(",\"Hot, strong\","));
        assert_eq!(
            lines[2],
            "Milk,,,,,,,,,,missing value for 'Battery Level'"
        );
    }

    #[test]
    fn empty_export_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        assert!(matches!(
            export_csv(&path, &[]),
            Err(SmartTempError::NoResults)
        ));
        assert!(!path.exists());
    }
}
