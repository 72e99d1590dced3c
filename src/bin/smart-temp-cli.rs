use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use smart_temp::data::filter::{apply_filters, parse_max_time, FilterCriteria};
use smart_temp::export::{export_csv, export_pdf};
use smart_temp::pipeline::load_and_compute;
use smart_temp::present::{display_row, render_grid, TABLE_HEADERS};
use smart_temp::{SmartTempError, TemperatureUnit};

const PDF_TITLE: &str = "Smart Temp CLI Export";

#[derive(Parser)]
#[command(name = "smart-temp-cli")]
#[command(about = "Smart Temp CLI Tool - heating/cooling estimates for liquids", long_about = None)]
struct Cli {
    /// Show temperatures in Fahrenheit
    #[arg(long, env = "SMART_TEMP_FAHRENHEIT")]
    fahrenheit: bool,

    /// Export results to CSV
    #[arg(long, value_name = "CSV_PATH")]
    export_csv: Option<PathBuf>,

    /// Export results to PDF
    #[arg(long, value_name = "PDF_PATH")]
    export_pdf: Option<PathBuf>,

    /// Data file (CSV, XLSX or JSON); prompted for when omitted
    #[arg(long)]
    file: Option<PathBuf>,

    /// Only show this liquid type (case-insensitive); prompted for when omitted
    #[arg(long)]
    drink_type: Option<String>,

    /// Only show results reaching target within this many minutes; prompted for when omitted
    #[arg(long)]
    max_time: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    if let Err(e) = run(&cli, &mut input) {
        match e.downcast_ref::<SmartTempError>() {
            Some(SmartTempError::FileNotFound(_)) => {
                println!("❌ File not found. Please check the path and try again.")
            }
            _ => println!("❌ Error: {e:#}"),
        }
    }
}

fn run(cli: &Cli, input: &mut impl BufRead) -> Result<()> {
    println!("🔍 Smart Temp tool - File Loader");
    let path = match &cli.file {
        Some(p) => p.clone(),
        None => PathBuf::from(prompt(
            input,
            "Enter the path to your data file(CSV, XLSX, or JSON): ",
        )?),
    };

    let outcomes = load_and_compute(&path)?;
    println!("✅ data validated. All required columns are present.");
    println!("✅ File successfully loaded and validated. Calculating metrics... \n");

    let drink_type = match &cli.drink_type {
        Some(d) => Some(d.clone()),
        None => Some(prompt(input, "Filter by drink type (press Enter to skip): ")?),
    }
    .filter(|d| !d.trim().is_empty());

    let max_time = match &cli.max_time {
        Some(t) => t.clone(),
        None => prompt(
            input,
            "Filter by max heat time in minutes (press Enter to skip): ",
        )?,
    };
    let max_time = parse_max_time(&max_time)?;

    let filtered = apply_filters(&outcomes, &FilterCriteria::new(drink_type, max_time));
    if filtered.is_empty() {
        println!("No matching results found.");
        return Ok(());
    }

    let unit = TemperatureUnit::from_fahrenheit_flag(cli.fahrenheit);
    let rows: Vec<Vec<String>> = filtered.iter().map(|o| display_row(o, unit)).collect();
    print!("{}", render_grid(&TABLE_HEADERS, &rows));

    if let Some(csv_path) = &cli.export_csv {
        export_csv(csv_path, &filtered)
            .with_context(|| format!("exporting CSV to {}", csv_path.display()))?;
        println!("✅ Results exported to CSV: {}", csv_path.display());
    }

    if let Some(pdf_path) = &cli.export_pdf {
        export_pdf(pdf_path, PDF_TITLE, &filtered)
            .with_context(|| format!("exporting PDF to {}", pdf_path.display()))?;
        println!("✅ Results exported to PDF: {}", pdf_path.display());
    }

    Ok(())
}

/// Print `message` and read one trimmed line. End of input reads as blank.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("flushing prompt")?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading answer")?;
    Ok(line.trim().to_string())
}
