mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::LaunchDeckApp;
use data::model::LaunchDataset;
use eframe::egui;
use state::AppState;

/// Fixed dataset location, resolved against the working directory. Run
/// `generate_sample` first if the real export is not available.
const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

fn load_startup_dataset() -> anyhow::Result<LaunchDataset> {
    let path = Path::new(DEFAULT_DATA_PATH);
    data::loader::load_file(path).with_context(|| format!("loading {}", path.display()))
}

fn main() -> eframe::Result {
    env_logger::init();

    // No partial loads: without the launch table the dashboard does not start.
    let mut state = AppState::default();
    match load_startup_dataset() {
        Ok(dataset) => {
            log::info!(
                "Loaded {} launch records from {} sites, payload {:.0}–{:.0} kg",
                dataset.len(),
                dataset.sites.len(),
                dataset.min_payload,
                dataset.max_payload
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDeckApp::new(state)))),
    )
}
