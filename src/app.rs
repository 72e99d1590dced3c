use std::time::Instant;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct SmartTempApp {
    pub state: AppState,
}

impl eframe::App for SmartTempApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Left side panel: file, filters, actions ----
        egui::SidePanel::left("controls")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::controls(ui, &mut self.state);
            });

        // ---- Bottom panel: text log ----
        egui::TopBottomPanel::bottom("results_log")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| {
                results::results_log(ui, &self.state);
            });

        // ---- Central panel: simulation and results table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::simulation(ui, &self.state);
            ui.separator();
            results::results_table(ui, &mut self.state);
        });

        // Last, so an animation started by a click in this frame is scheduled too.
        self.schedule_animation(ctx);
    }
}

impl SmartTempApp {
    /// Advance the temperature animation, then ask to be woken for the next step.
    fn schedule_animation(&mut self, ctx: &egui::Context) {
        if let Some(wait) = self.state.tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use smart_temp::simulation::STEP_INTERVAL;

    fn repaint_delay(output: &egui::FullOutput) -> std::time::Duration {
        output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map(|v| v.repaint_delay)
            .unwrap()
    }

    #[test]
    fn animation_started_during_a_frame_wakes_the_next_one() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "Liquid Type,Initial Temperature,Desired Temperature,Ambient Temperature,\
             Time to Target,Battery Level,User Preference\nTea,20,95,35,,80,Hot"
        )
        .unwrap();

        let ctx = egui::Context::default();
        let mut app = SmartTempApp::default();
        app.state.set_file(file.path().to_path_buf());
        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| app.schedule_animation(ctx));
        }

        let output = ctx.run(egui::RawInput::default(), |ctx| {
            app.state.calculate(Instant::now()).unwrap();
            app.schedule_animation(ctx);
        });
        assert!(app.state.animation.is_some());
        assert!(repaint_delay(&output) <= STEP_INTERVAL);
    }
}
