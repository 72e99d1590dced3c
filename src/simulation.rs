//! Step animation of a heating/cooling run.
//!
//! The animation never sleeps. The owner calls [`TempAnimation::tick`] from
//! its event loop and asks for the next wake-up with
//! [`TempAnimation::next_due`]; each step schedules the one after it.

use std::time::{Duration, Instant};

use crate::data::model::MetricsRecord;
use crate::units::{format_number, round_to, TemperatureUnit};

/// Delay between two displayed degrees.
pub const STEP_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct TempAnimation {
    start: f64,
    target: f64,
    unit: TemperatureUnit,
    steps: u32,
    step: u32,
    next_at: Instant,
    battery_level: f64,
    time_to_target: f64,
}

impl TempAnimation {
    /// Start an animation from `start` to `target` (both °C). Step 0 is
    /// showing as soon as this returns.
    pub fn new(
        start: f64,
        target: f64,
        battery_level: f64,
        time_to_target: f64,
        unit: TemperatureUnit,
        now: Instant,
    ) -> Self {
        let start = unit.project(start);
        let target = unit.project(target);
        let steps = (target - start).abs().floor() as u32;
        Self {
            start,
            target,
            unit,
            steps,
            step: 0,
            next_at: now + STEP_INTERVAL,
            battery_level,
            time_to_target,
        }
    }

    pub fn for_record(record: &MetricsRecord, unit: TemperatureUnit, now: Instant) -> Self {
        Self::new(
            record.initial_temperature,
            record.desired_temperature,
            record.battery_level,
            record.time_to_target,
            unit,
            now,
        )
    }

    /// Advance at most one step if it is due. Returns whether the displayed
    /// value changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_finished() || now < self.next_at {
            return false;
        }
        self.step += 1;
        self.next_at = now + STEP_INTERVAL;
        true
    }

    /// How long until the next step, `None` once finished.
    pub fn next_due(&self, now: Instant) -> Option<Duration> {
        if self.is_finished() {
            None
        } else {
            Some(self.next_at.saturating_duration_since(now))
        }
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Displayed temperature: one degree per step towards the target.
    pub fn current_temperature(&self) -> f64 {
        let delta = f64::from(self.step);
        let value = if self.target > self.start {
            self.start + delta
        } else {
            self.start - delta
        };
        round_to(value, 1)
    }

    /// Fraction of the temperature span covered so far, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let span = (self.target - self.start).abs();
        if span == 0.0 {
            return 1.0;
        }
        (f64::from(self.step) / span).clamp(0.0, 1.0) as f32
    }

    pub fn temperature_label(&self) -> String {
        format!(
            "Temperature: {}{}",
            format_number(self.current_temperature()),
            self.unit.symbol()
        )
    }

    pub fn battery_level(&self) -> f64 {
        self.battery_level
    }

    pub fn battery_label(&self) -> String {
        format!("Battery Level: {}%", format_number(self.battery_level))
    }

    pub fn feedback(&self) -> String {
        format!(
            "Your drink will be ready in {} min",
            format_number(self.time_to_target)
        )
    }
}
