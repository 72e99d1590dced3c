use std::time::Instant;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use smart_temp::data::model::{Alert, RowOutcome};
use smart_temp::present::{display_row, TABLE_HEADERS};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered results with a "Simulate" action per metrics row.
pub fn results_table(ui: &mut Ui, state: &mut AppState) {
    if state.last_results.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Browse for a data file, then press Calculate");
        });
        return;
    }

    let mut simulate: Option<usize> = None;
    let unit = state.results_unit;

    ui.push_id("results_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto())
            .columns(Column::auto().resizable(true), TABLE_HEADERS.len() - 1)
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("");
                });
                for title in TABLE_HEADERS {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for (idx, outcome) in state.last_results.iter().enumerate() {
                    let cells = display_row(outcome, unit);
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            if !outcome.is_error() && ui.small_button("Simulate").clicked() {
                                simulate = Some(idx);
                            }
                        });
                        for (col, text) in cells.iter().enumerate() {
                            row.col(|ui| {
                                ui.label(cell_text(outcome, col, text));
                            });
                        }
                    });
                }
            });
    });

    if let Some(idx) = simulate {
        state.simulate(idx, Instant::now());
        ui.ctx().request_repaint();
    }
}

fn cell_text(outcome: &RowOutcome, col: usize, text: &str) -> RichText {
    match outcome {
        RowOutcome::Error(_) => RichText::new(text).color(Color32::RED),
        RowOutcome::Metrics(m) if TABLE_HEADERS[col] == "Alert" => {
            let color = match m.alert {
                Alert::OverheatingRisk => Color32::from_rgb(230, 120, 30),
                Alert::FreezingRisk => Color32::LIGHT_BLUE,
                Alert::Normal => Color32::from_rgb(80, 180, 80),
            };
            RichText::new(format!("{} {text}", m.alert.icon())).color(color)
        }
        RowOutcome::Metrics(_) => RichText::new(text),
    }
}

// ---------------------------------------------------------------------------
// Text log (bottom panel)
// ---------------------------------------------------------------------------

pub fn results_log(ui: &mut Ui, state: &AppState) {
    ui.strong("Log");
    ScrollArea::vertical()
        .id_salt("log_scroll")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui: &mut Ui| {
            for line in &state.log {
                ui.monospace(line);
            }
        });
}
