//! Writers for filtered results: a flat CSV table and a plain-text PDF report.

pub mod csv;
pub mod pdf;

pub use self::csv::export_csv;
pub use self::pdf::export_pdf;
