use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use smart_temp::data::filter::{apply_filters, parse_drink_type, parse_max_time, FilterCriteria};
use smart_temp::data::model::RowOutcome;
use smart_temp::export::{export_csv, export_pdf};
use smart_temp::pipeline::load_and_compute;
use smart_temp::present::log_lines;
use smart_temp::simulation::TempAnimation;
use smart_temp::{Result, SmartTempError, TemperatureUnit};

pub const PDF_TITLE: &str = "Smart Temp Tool - Exported Results";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// File picked with "Browse" (None until the user picks one).
    pub file_path: Option<PathBuf>,

    /// Raw text of the filter entries.
    pub drink_input: String,
    pub max_time_input: String,

    pub use_fahrenheit: bool,

    /// Results text log, one entry per line.
    pub log: Vec<String>,

    /// Filtered outcomes of the last successful calculation.
    pub last_results: Vec<RowOutcome>,

    /// Unit the results were rendered in.
    pub results_unit: TemperatureUnit,

    /// The single running (or finished) temperature animation.
    pub animation: Option<TempAnimation>,
}

impl AppState {
    pub fn unit(&self) -> TemperatureUnit {
        TemperatureUnit::from_fahrenheit_flag(self.use_fahrenheit)
    }

    pub fn set_file(&mut self, path: PathBuf) {
        self.log.push(format!("Loaded file: {}", path.display()));
        self.file_path = Some(path);
    }

    /// Load, validate, compute and filter; then animate the last record.
    ///
    /// On error the log keeps whatever was written before the failure and
    /// the previous results stay exportable.
    pub fn calculate(&mut self, now: Instant) -> Result<()> {
        self.log.clear();
        let path = self.file_path.clone().ok_or(SmartTempError::NoFileSelected)?;

        let outcomes = load_and_compute(&path)?;
        self.log
            .push("✅ Data validated. All required columns are present.".to_string());

        let criteria = FilterCriteria::new(
            parse_drink_type(&self.drink_input)?,
            parse_max_time(&self.max_time_input)?,
        );
        let filtered = apply_filters(&outcomes, &criteria);
        log::info!(
            "{} of {} rows match {:?}",
            filtered.len(),
            outcomes.len(),
            criteria
        );

        self.results_unit = self.unit();
        self.last_results = filtered;
        if self.last_results.is_empty() {
            self.log.push("⚠️ No results matched the filters.".to_string());
            return Ok(());
        }

        self.log.push(String::new());
        self.log.push("=== Calculation Results ===".to_string());
        for outcome in &self.last_results {
            self.log.extend(log_lines(outcome, self.results_unit));
            self.log.push(String::new());
        }

        if let Some(last) = self.last_results.iter().rposition(|o| !o.is_error()) {
            self.simulate(last, now);
        }
        Ok(())
    }

    /// Animate result `index`, replacing any animation still in flight.
    pub fn simulate(&mut self, index: usize, now: Instant) {
        let Some(record) = self.last_results.get(index).and_then(RowOutcome::as_metrics) else {
            return;
        };
        if self.animation.as_ref().is_some_and(|a| !a.is_finished()) {
            log::debug!("Cancelling running temperature animation");
        }
        self.animation = Some(TempAnimation::for_record(record, self.results_unit, now));
    }

    /// Advance the animation; returns when the UI should wake up next.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let anim = self.animation.as_mut()?;
        anim.tick(now);
        anim.next_due(now)
    }

    pub fn export_csv(&self, path: &Path) -> Result<()> {
        export_csv(path, &self.last_results)
    }

    pub fn export_pdf(&self, path: &Path) -> Result<()> {
        export_pdf(path, PDF_TITLE, &self.last_results)
    }
}
