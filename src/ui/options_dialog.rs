//! Optionen-Dialog für Treffertests, Verhalten, Farben und Größen.

use crate::app::{AppIntent, AppState};
use crate::core::{ContinuityPolicy, LeaveBehavior};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Treffertests ────────────────────────────────
                    ui.collapsing("Treffertests", |ui| {
                        changed |= drag_value(
                            ui,
                            "Punkt-Radius:",
                            &mut opts.hit_radius,
                            2.0..=30.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Kurven-Radius:",
                            &mut opts.curve_hit_radius,
                            2.0..=30.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Abtastschritt t:",
                            &mut opts.curve_sample_step,
                            0.005..=0.25,
                            0.005,
                        );
                        changed |= drag_value(
                            ui,
                            "Verbindungs-Toleranz:",
                            &mut opts.join_tolerance,
                            0.0..=20.0,
                            0.5,
                        );
                    });

                    // ── Verhalten ───────────────────────────────────
                    ui.collapsing("Verhalten", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Glättung:");
                            changed |= ui
                                .radio_value(
                                    &mut opts.continuity_policy,
                                    ContinuityPolicy::NormalizeHandles,
                                    "Ausrichten",
                                )
                                .changed();
                            changed |= ui
                                .radio_value(
                                    &mut opts.continuity_policy,
                                    ContinuityPolicy::MirrorOnly,
                                    "Spiegeln",
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Canvas verlassen:");
                            changed |= ui
                                .radio_value(
                                    &mut opts.leave_behavior,
                                    LeaveBehavior::KeepDragging,
                                    "Weiterziehen",
                                )
                                .changed();
                            changed |= ui
                                .radio_value(
                                    &mut opts.leave_behavior,
                                    LeaveBehavior::CancelDrag,
                                    "Drag beenden",
                                )
                                .changed();
                        });
                        changed |= ui
                            .checkbox(&mut opts.click_adds_point, "Klick ins Leere hängt Punkt an")
                            .changed();
                        changed |= drag_value(
                            ui,
                            "Randabstand:",
                            &mut opts.clamp_margin,
                            0.0..=50.0,
                            0.5,
                        );
                    });

                    // ── Neue Pfade & Segmente ───────────────────────
                    ui.collapsing("Neue Pfade & Segmente", |ui| {
                        changed |= drag_value(
                            ui,
                            "Versatz neuer Pfad:",
                            &mut opts.new_path_offset,
                            0.0..=200.0,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Farbton-Schritt (°):",
                            &mut opts.path_hue_step,
                            0.0..=360.0,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Handle-Länge:",
                            &mut opts.segment_handle_length,
                            1.0..=300.0,
                            1.0,
                        );
                    });

                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Darstellung", |ui| {
                        changed |= drag_value(
                            ui,
                            "Linie aktiv:",
                            &mut opts.stroke_width_active,
                            0.5..=20.0,
                            0.1,
                        );
                        changed |= drag_value(
                            ui,
                            "Linie inaktiv:",
                            &mut opts.stroke_width_inactive,
                            0.5..=20.0,
                            0.1,
                        );
                        changed |= drag_value(
                            ui,
                            "Punkt-Radius:",
                            &mut opts.point_radius,
                            1.0..=20.0,
                            0.1,
                        );
                        changed |= color_edit(ui, "Handle-Linien:", &mut opts.handle_line_color);
                        changed |= color_edit(ui, "Gezogener Punkt:", &mut opts.drag_point_color);
                        changed |= ui
                            .checkbox(&mut opts.show_point_indices, "Punktindizes anzeigen")
                            .changed();
                        changed |= drag_value(
                            ui,
                            "Hintergrund-Deckkraft:",
                            &mut opts.background_opacity,
                            0.0..=1.0,
                            0.01,
                        );
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: beschrifteter Zahlenwert mit Bereich.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(egui::DragValue::new(value).range(range).speed(speed))
            .changed();
    });
    changed
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
