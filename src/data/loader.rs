use std::collections::BTreeMap;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use serde_json::{Map, Value as JsonValue};

use super::model::{CellValue, Row, Table};
use crate::error::{Result, SmartTempError};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table from a file.  Dispatch by extension (case-insensitive).
///
/// Supported formats:
/// * `.csv`  – header row followed by one record per line
/// * `.xlsx` – first worksheet, first row is the header
/// * `.json` – `[{ "Liquid Type": "Tea", ... }, ...]` or `{ "col": { "0": v, ... } }`
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(SmartTempError::FileNotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(path)?,
        "xlsx" => load_xlsx(path)?,
        "json" => load_json(path)?,
        other => {
            return Err(SmartTempError::UnsupportedFormat {
                extension: format!(".{other}"),
            })
        }
    };

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.len(),
        table.columns,
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Short records are accepted; their trailing cells read as missing.
fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;
    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Row = columns
            .iter()
            .zip(record.iter())
            .map(|(col, value)| (col.clone(), CellValue::from_text(value.trim())))
            .collect();
        rows.push(row);
    }

    Ok(Table::new(columns, rows))
}

// ---------------------------------------------------------------------------
// XLSX loader
// ---------------------------------------------------------------------------

fn load_xlsx(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SmartTempError::EmptyWorkbook)??;

    let mut sheet_rows = range.rows();
    let columns: Vec<String> = match sheet_rows.next() {
        Some(header) => header.iter().map(|c| c.to_string().trim().to_string()).collect(),
        None => return Ok(Table::default()),
    };

    let rows = sheet_rows
        .map(|cells| {
            columns
                .iter()
                .zip(cells.iter())
                .map(|(col, cell)| (col.clone(), xlsx_to_cell(cell)))
                .collect()
        })
        .collect();

    Ok(Table::new(columns, rows))
}

fn xlsx_to_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::String(s.clone()),
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Accepts the two layouts pandas writes by default:
///
/// ```json
/// [ { "Liquid Type": "Tea", "Initial Temperature": 20, ... }, ... ]
/// ```
///
/// or column-oriented
///
/// ```json
/// { "Liquid Type": { "0": "Tea", "1": "Coffee" }, ... }
/// ```
fn load_json(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    match root {
        JsonValue::Array(records) => json_records(&records),
        JsonValue::Object(columns) => json_columns(&columns),
        _ => Err(SmartTempError::JsonLayout(
            "expected a top-level array or object".to_string(),
        )),
    }
}

fn json_records(records: &[JsonValue]) -> Result<Table> {
    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| SmartTempError::JsonLayout(format!("row {i} is not an object")))?;

        let mut row = Row::new();
        for (key, val) in obj {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
            row.insert(key.clone(), json_to_cell(val));
        }
        rows.push(row);
    }

    Ok(Table::new(columns, rows))
}

fn json_columns(obj: &Map<String, JsonValue>) -> Result<Table> {
    // index label → row; index labels are sorted numerically when possible
    let mut by_index: BTreeMap<(u64, String), Row> = BTreeMap::new();
    let columns: Vec<String> = obj.keys().cloned().collect();

    for (col, values) in obj {
        match values {
            JsonValue::Object(cells) => {
                for (idx, val) in cells {
                    let key = (idx.parse::<u64>().unwrap_or(u64::MAX), idx.clone());
                    by_index
                        .entry(key)
                        .or_default()
                        .insert(col.clone(), json_to_cell(val));
                }
            }
            JsonValue::Array(cells) => {
                for (idx, val) in cells.iter().enumerate() {
                    by_index
                        .entry((idx as u64, idx.to_string()))
                        .or_default()
                        .insert(col.clone(), json_to_cell(val));
                }
            }
            _ => {
                return Err(SmartTempError::JsonLayout(format!(
                    "column '{col}' is neither an object nor an array"
                )))
            }
        }
    }

    Ok(Table::new(columns, by_index.into_values().collect()))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}
