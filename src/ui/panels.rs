use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::{PayloadRange, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the control panel: site dropdown and payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the widgets.
    let sites = dataset.sites.clone();
    let (min_payload, max_payload) = (dataset.min_payload, dataset.max_payload);

    // ---- Site dropdown ----
    ui.strong("Launch Site");
    let current = state.selected_site.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::All, "All Sites")
                .clicked()
            {
                state.select_site(SiteSelection::All);
            }
            for site in &sites {
                let option = SiteSelection::Site(site.clone());
                if ui.selectable_label(current == option, site).clicked() {
                    state.select_site(option);
                }
            }
        });

    ui.separator();

    // ---- Payload range sliders ----
    // Two handles: the low slider tops out at the current high and vice
    // versa, so `low <= high` holds by construction.
    ui.strong("Payload range (kg)");
    let mut low = state.payload_range.low;
    let mut high = state.payload_range.high;

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, min_payload..=high)
                .step_by(1000.0)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, low..=max_payload)
                .step_by(1000.0)
                .text("max"),
        )
        .changed();
    if low_changed || high_changed {
        state.set_payload_range(PayloadRange::new(low, high));
    }

    if ui.button("Full range").clicked() {
        state.set_payload_range(PayloadRange::new(min_payload, max_payload));
    }
    ui.label(format!(
        "showing {:.0} – {:.0} kg",
        state.payload_range.low, state.payload_range.high
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.strong("SpaceX Launch Records Dashboard");
        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} launches across {} sites", ds.len(), ds.sites.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user swap in another launch-records snapshot. A failed load keeps
/// the current dataset and surfaces the error in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launch records from {} sites",
                    dataset.len(),
                    dataset.sites.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
