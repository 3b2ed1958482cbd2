//! Top-Menü (Datei, Pfade, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Aktiven Pfad exportieren (Ctrl+E)").clicked() {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                let background_label = if state.view.background_image.is_some() {
                    "Hintergrundbild wechseln..."
                } else {
                    "Hintergrundbild laden..."
                };
                if ui.button(background_label).clicked() {
                    events.push(AppIntent::BackgroundImageSelectionRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Pfade", |ui| {
                if ui.button("Neuer Pfad (Ctrl+N)").clicked() {
                    events.push(AppIntent::AddPathRequested);
                    ui.close();
                }
                if ui.button("Aktiven Pfad löschen").clicked() {
                    events.push(AppIntent::DeletePathRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Segment anhängen (+)").clicked() {
                    events.push(AppIntent::AddSegmentRequested);
                    ui.close();
                }
                let can_delete_segment = state.paths.active_curve().segment_count() > 1;
                if ui
                    .add_enabled(
                        can_delete_segment,
                        egui::Button::new("Letztes Segment löschen (-)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::DeleteLastSegmentRequested);
                    ui.close();
                }

                ui.separator();

                ui.menu_button("Aktiver Pfad", |ui| {
                    for index in 0..state.path_count() {
                        let selected = index == state.active_path_index();
                        if ui
                            .selectable_label(selected, format!("p{}", index))
                            .clicked()
                        {
                            events.push(AppIntent::SwitchPathRequested { index });
                            ui.close();
                        }
                    }
                });

                ui.separator();

                if ui.button("Alle Pfade zurücksetzen").clicked() {
                    events.push(AppIntent::ClearPathsRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                let has_background = state.view.background_image.is_some();
                let toggle_label = if state.view.background_visible {
                    "Hintergrund ausblenden"
                } else {
                    "Hintergrund einblenden"
                };
                if ui
                    .add_enabled(has_background, egui::Button::new(toggle_label))
                    .clicked()
                {
                    events.push(AppIntent::ToggleBackgroundVisibility);
                    ui.close();
                }

                let mut opacity = state.view.background_opacity;
                if ui
                    .add_enabled(
                        has_background,
                        egui::Slider::new(&mut opacity, 0.0..=1.0).text("Deckkraft"),
                    )
                    .changed()
                {
                    events.push(AppIntent::BackgroundOpacityChanged { opacity });
                }
            });
        });
    });

    events
}
