//! Data layer: core types, loading, validation, metrics and filtering.
//!
//! Architecture:
//! ```text
//!  .csv / .xlsx / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Table
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ validate  │  required columns present?
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ metrics   │  one RowOutcome per row (metrics | error)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  drink type / max time; errors always kept
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod validate;
