use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Legend, MarkerShape, Plot, Points};

use crate::color::generate_palette;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Success pie chart (upper half of the central panel)
// ---------------------------------------------------------------------------

/// Render the launch-outcome pie chart from the cached breakdown.
pub fn success_pie(ui: &mut Ui, state: &AppState) {
    let Some(breakdown) = &state.pie else {
        placeholder(ui);
        return;
    };

    ui.strong(&breakdown.title);
    let total = breakdown.total();
    if total == 0 {
        ui.label("No launches match the current selection.");
        return;
    }

    let colors = generate_palette(breakdown.slices.len());

    ui.horizontal(|ui: &mut Ui| {
        let side = ui.available_height().min(ui.available_width() * 0.5);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let center = response.rect.center();
        let radius = side * 0.45;

        // Slices start at 12 o'clock and run clockwise, in breakdown order.
        let mut angle = -FRAC_PI_2;
        for ((_, count), color) in breakdown.slices.iter().zip(&colors) {
            let sweep = TAU * (*count as f32 / total as f32);
            painter.add(pie_slice(center, radius, angle, sweep, *color));
            angle += sweep;
        }

        ui.add_space(12.0);
        ui.vertical(|ui: &mut Ui| {
            for ((label, count), color) in breakdown.slices.iter().zip(&colors) {
                let pct = 100.0 * *count as f64 / total as f64;
                ui.label(
                    RichText::new(format!("{label}: {count} ({pct:.1}%)")).color(*color),
                );
            }
        });
    });
}

/// One filled pie slice as a triangle-fan polygon around the centre.
fn pie_slice(center: Pos2, radius: f32, start: f32, sweep: f32, color: Color32) -> Shape {
    // ~3° per arc segment keeps the outline smooth at any slice size.
    let steps = ((sweep / 0.05).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let a = start + sweep * i as f32 / steps as f32;
        points.push(center + radius * Vec2::new(a.cos(), a.sin()));
    }
    Shape::convex_polygon(points, color, Stroke::NONE)
}

// ---------------------------------------------------------------------------
// Payload scatter chart (lower half of the central panel)
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter from the cached correlation view,
/// one coloured series per booster version category.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let (Some(dataset), Some(view)) = (&state.dataset, &state.scatter) else {
        placeholder(ui);
        return;
    };

    ui.strong(&view.title);
    if view.indices.is_empty() {
        ui.label("No launches match the current selection.");
        return;
    }

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Class")
        .include_y(-0.5)
        .include_y(1.5)
        .show(ui, |plot_ui| {
            for category in &dataset.categories {
                let points: Vec<[f64; 2]> = view
                    .indices
                    .iter()
                    .map(|&i| &dataset.records[i])
                    .filter(|rec| rec.booster_version_category == *category)
                    .map(|rec| [rec.payload_mass_kg, f64::from(rec.outcome)])
                    .collect();
                if points.is_empty() {
                    continue;
                }

                let color = state
                    .category_colors
                    .as_ref()
                    .map(|cm| cm.color_for(category))
                    .unwrap_or(Color32::LIGHT_BLUE);

                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(4.0),
                );
            }
        });
}

fn placeholder(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a launch-records file to view charts  (File → Open…)");
    });
}
