use std::time::Instant;

use eframe::egui::{self, RichText, Ui};

use smart_temp::SmartTempError;

use super::dialogs;
use crate::state::AppState;

const BAR_WIDTH: f32 = 400.0;

// ---------------------------------------------------------------------------
// Left side panel – file, filters and actions
// ---------------------------------------------------------------------------

/// Render the control panel.
pub fn controls(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Smart Temp");
    ui.separator();

    ui.strong("Select Data File");
    if ui.button("Browse…").clicked() {
        if let Some(path) = dialogs::pick_data_file() {
            log::info!("Selected {}", path.display());
            state.set_file(path);
        }
    }
    if let Some(path) = &state.file_path {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.label(RichText::new(name).weak());
    }
    ui.add_space(8.0);

    ui.label("Drink Type (optional)");
    ui.text_edit_singleline(&mut state.drink_input);
    ui.label("Max Time (min, optional)");
    ui.text_edit_singleline(&mut state.max_time_input);
    ui.checkbox(&mut state.use_fahrenheit, "Use Fahrenheit");
    ui.add_space(8.0);

    if ui.button("Calculate").clicked() {
        match state.calculate(Instant::now()) {
            Ok(()) => ui.ctx().request_repaint(),
            Err(e) => {
                log::error!("Calculation failed: {e}");
                dialogs::show_error(error_title(&e), &e.to_string());
            }
        }
    }

    ui.separator();

    if ui.button("Export to CSV").clicked() {
        export(state, ExportKind::Csv);
    }
    if ui.button("Export to PDF").clicked() {
        export(state, ExportKind::Pdf);
    }
}

fn error_title(err: &SmartTempError) -> &'static str {
    match err {
        SmartTempError::FilterInput(_) => "Input Error",
        _ => "Error",
    }
}

#[derive(Clone, Copy)]
enum ExportKind {
    Csv,
    Pdf,
}

fn export(state: &AppState, kind: ExportKind) {
    if state.last_results.is_empty() {
        dialogs::show_error("Error", &SmartTempError::NoResults.to_string());
        return;
    }

    let picked = match kind {
        ExportKind::Csv => dialogs::pick_save_path("Save results as CSV", "CSV files", "csv"),
        ExportKind::Pdf => dialogs::pick_save_path("Save results as PDF", "PDF files", "pdf"),
    };
    let Some(path) = picked else {
        return;
    };

    let result = match kind {
        ExportKind::Csv => state.export_csv(&path),
        ExportKind::Pdf => state.export_pdf(&path),
    };
    match result {
        Ok(()) => dialogs::show_info("Success", &format!("Results exported to {}", path.display())),
        Err(e) => {
            log::error!("Export to {} failed: {e}", path.display());
            dialogs::show_error("Export Error", &e.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation – temperature and battery bars
// ---------------------------------------------------------------------------

/// Render the temperature animation and battery indicator.
pub fn simulation(ui: &mut Ui, state: &AppState) {
    let Some(anim) = &state.animation else {
        ui.label("Temperature Simulation");
        ui.add(egui::ProgressBar::new(0.0).desired_width(BAR_WIDTH));
        ui.label("Battery Level");
        ui.add(egui::ProgressBar::new(0.0).desired_width(BAR_WIDTH));
        return;
    };

    ui.label(anim.temperature_label());
    ui.add(
        egui::ProgressBar::new(anim.progress())
            .desired_width(BAR_WIDTH)
            .text(format!("{}/{}", anim.step(), anim.steps())),
    );

    ui.label(anim.battery_label());
    let battery = (anim.battery_level() / 100.0).clamp(0.0, 1.0) as f32;
    ui.add(egui::ProgressBar::new(battery).desired_width(BAR_WIDTH));

    ui.add_space(4.0);
    ui.label(RichText::new(anim.feedback()).strong());
}
