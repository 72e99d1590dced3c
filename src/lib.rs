//! Heating/cooling estimates for liquids.
//!
//! The library is the part both front ends share: load a table, check its
//! columns, derive per-row metrics, filter them, and export the result.
//! The `smart-temp` GUI and the `smart-temp-cli` binary only add
//! presentation on top.

pub mod data;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod present;
pub mod simulation;
pub mod units;

pub use data::filter::{apply_filters, FilterCriteria};
pub use data::model::{MetricsRecord, RowOutcome};
pub use error::{Result, SmartTempError};
pub use units::TemperatureUnit;
