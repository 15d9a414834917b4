use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDeckApp {
    pub state: AppState,
}

impl LaunchDeckApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: site dropdown + payload sliders ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above, scatter below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let half = ui.available_height() / 2.0;
            ui.allocate_ui(egui::vec2(ui.available_width(), half), |ui| {
                charts::success_pie(ui, &self.state);
            });
            ui.separator();
            charts::payload_scatter(ui, &self.state);
        });
    }
}
