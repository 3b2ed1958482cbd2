//! Toolbar für Pfad- und Segment-Aktionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.active_path_index();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Pfad:");
            egui::ComboBox::from_id_salt("active_path")
                .selected_text(format!("p{}", active))
                .show_ui(ui, |ui| {
                    for index in 0..state.path_count() {
                        if ui
                            .selectable_label(index == active, format!("p{}", index))
                            .clicked()
                            && index != active
                        {
                            events.push(AppIntent::SwitchPathRequested { index });
                        }
                    }
                });

            if ui.button("Neuer Pfad").clicked() {
                events.push(AppIntent::AddPathRequested);
            }
            if ui.button("Pfad löschen").clicked() {
                events.push(AppIntent::DeletePathRequested);
            }

            ui.separator();

            if ui.button("Segment +").clicked() {
                events.push(AppIntent::AddSegmentRequested);
            }
            let can_delete_segment = state.paths.active_curve().segment_count() > 1;
            if ui
                .add_enabled(can_delete_segment, egui::Button::new("Segment −"))
                .clicked()
            {
                events.push(AppIntent::DeleteLastSegmentRequested);
            }

            ui.separator();

            if ui.button("Exportieren").clicked() {
                events.push(AppIntent::ExportRequested);
            }
            if ui.button("Zurücksetzen").clicked() {
                events.push(AppIntent::ClearPathsRequested);
            }

            ui.separator();

            if ui.button("Hintergrund...").clicked() {
                events.push(AppIntent::BackgroundImageSelectionRequested);
            }
        });
    });

    events
}
