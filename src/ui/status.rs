//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::format_coordinate;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(coordinate_readout(state)).monospace());

            ui.separator();

            let active = state.paths.active_curve();
            ui.label(format!(
                "Pfade: {} | Aktiv: p{} ({} Segmente, {} Punkte)",
                state.path_count(),
                state.active_path_index(),
                active.segment_count(),
                active.len()
            ));

            if let Some(drag) = state.paths.drag_state() {
                ui.separator();
                ui.label(format!("Drag: p{} / Punkt {}", drag.curve, drag.index));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

/// Koordinatenanzeige in Feldkoordinaten, Platzhalter außerhalb des Canvas.
fn coordinate_readout(state: &AppState) -> String {
    let (x, y) = state
        .view
        .pointer_field_pos
        .map_or((f32::NAN, f32::NAN), |pos| (pos.x, pos.y));
    format!(
        "Coordinates: ({}, {})",
        format_coordinate(x),
        format_coordinate(y)
    )
}
