//! Text projections of results shared by the CLI table and the GUI log.

use unicode_width::UnicodeWidthStr;

use crate::data::model::RowOutcome;
use crate::units::{format_number, TemperatureUnit};

pub const TABLE_HEADERS: [&str; 9] = [
    "Liquid",
    "Start Temp",
    "Target Temp",
    "Ambient",
    "Time",
    "Power",
    "Alert",
    "Tip",
    "Preference",
];

/// One table row per outcome. Error rows are `[liquid, "ERROR", message]`
/// padded to the header width.
pub fn display_row(outcome: &RowOutcome, unit: TemperatureUnit) -> Vec<String> {
    match outcome {
        RowOutcome::Metrics(m) => vec![
            m.liquid_type.clone(),
            unit.format(m.initial_temperature),
            unit.format(m.desired_temperature),
            unit.format(m.ambient_temperature),
            format!("{} min", format_number(m.time_to_target)),
            format!("{}%", format_number(m.power_usage)),
            m.alert.to_string(),
            m.power_tip.to_string(),
            m.user_preference.clone(),
        ],
        RowOutcome::Error(e) => {
            let mut row = vec![e.liquid_type.clone(), "ERROR".to_string(), e.error.clone()];
            row.resize(TABLE_HEADERS.len(), String::new());
            row
        }
    }
}

/// Lines written to the GUI results log for one outcome.
pub fn log_lines(outcome: &RowOutcome, unit: TemperatureUnit) -> Vec<String> {
    match outcome {
        RowOutcome::Metrics(m) => vec![
            format!(
                "Liquid: {}, Initial: {}, Desired: {}",
                m.liquid_type,
                unit.format(m.initial_temperature),
                unit.format(m.desired_temperature)
            ),
            format!(
                "Ambient: {}, Time: {} min, Power: {}%, Alert: {} {}, Tip: {}, Pref: {}",
                unit.format(m.ambient_temperature),
                format_number(m.time_to_target),
                format_number(m.power_usage),
                m.alert.icon(),
                m.alert,
                m.power_tip,
                m.user_preference
            ),
        ],
        RowOutcome::Error(e) => vec![format!("Error ({}): {}", e.liquid_type, e.error)],
    }
}

// ---------------------------------------------------------------------------
// Box-drawn grid
// ---------------------------------------------------------------------------

/// Render rows under `headers` as a box-drawn grid with a double rule under
/// the header and a single rule between body rows.
///
/// Columns are sized by terminal display width, so wide characters take
/// two cells.
pub fn render_grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.width())
                .chain(std::iter::once(h.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, fill: &str, mid: &str, right: &str| -> String {
        let parts: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
        format!("{left}{}{right}\n", parts.join(mid))
    };
    let line = |cells: Vec<&str>| -> String {
        let parts: Vec<String> = widths
            .iter()
            .zip(cells.iter().chain(std::iter::repeat(&"")))
            .map(|(w, c)| format!(" {c}{} ", " ".repeat(w - c.width())))
            .collect();
        format!("│{}│\n", parts.join("│"))
    };

    let mut out = rule("╒", "═", "╤", "╕");
    out.push_str(&line(headers.to_vec()));
    out.push_str(&rule("╞", "═", "╪", "╡"));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(&rule("├", "─", "┼", "┤"));
        }
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out.push_str(&rule("╘", "═", "╧", "╛"));
    out
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
            user_preference: "Hot".into(),
        })
    }

    #[test]
    fn metrics_row_in_fahrenheit() {
        let row = display_row(&tea(), TemperatureUnit::Fahrenheit);
        assert_eq!(
            row,
            vec![
                "Tea",
                "68.0°F",
                "203.0°F",
                "95.0°F",
                "33.75 min",
                "51.0%",
                "Overheating Risk",
                "Consider reducing target temp to save battery.",
                "Hot",
            ]
        );
    }

    #[test]
    fn error_row_is_padded() {
        let err = RowOutcome::Error(ErrorRecord {
            liquid_type: "Milk".into(),
            error: "boom".into(),
        });
        let row = display_row(&err, TemperatureUnit::Celsius);
        assert_eq!(row.len(), TABLE_HEADERS.len());
        assert_eq!(&row[..3], ["Milk", "ERROR", "boom"]);
    }

    #[test]
    fn log_lines_carry_alert_icon() {
        let lines = log_lines(&tea(), TemperatureUnit::Celsius);
        assert_eq!(lines[0], "Liquid: Tea, Initial: 20.0°C, Desired: 95.0°C");
        assert!(lines[1].contains("Alert: ⚠️ Overheating Risk"));
    }

    #[test]
    fn grid_columns_line_up() {
        let grid = render_grid(
            &["A", "Long header"],
            &[vec!["°C".into(), "x".into()], vec!["wide cell".into()]],
        );
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 7);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert_eq!(lines[1], "│ A         │ Long header │");
        assert_eq!(lines[3], "│ °C        │ x           │");
    }

    #[test]
    fn wide_characters_keep_columns_aligned() {
        let grid = render_grid(
            &["Liquid", "Time"],
            &[vec!["緑茶".into(), "5.0".into()], vec!["Tea".into(), "12.5".into()]],
        );
        let lines: Vec<&str> = grid.lines().collect();
        let width = lines[0].width();
        assert!(lines.iter().all(|l| l.width() == width));
        assert_eq!(lines[3], "│ 緑茶   │ 5.0  │");
        assert_eq!(lines[5], "│ Tea    │ 12.5 │");
    }
}
