//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    active_path: usize,
    path_count: usize,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_n, key_e, key_delete, key_tab, key_plus, key_minus) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::N),
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::Delete),
            i.key_pressed(egui::Key::Tab),
            i.key_pressed(egui::Key::Plus),
            i.key_pressed(egui::Key::Minus),
        )
    });

    // Ctrl+N (neuer Pfad), Ctrl+E (Export), Ctrl+Entf (Pfad löschen)
    if modifiers.command && key_n {
        events.push(AppIntent::AddPathRequested);
    }
    if modifiers.command && key_e {
        events.push(AppIntent::ExportRequested);
    }
    if modifiers.command && key_delete {
        events.push(AppIntent::DeletePathRequested);
    }

    // Segmente
    if key_plus && !modifiers.command {
        events.push(AppIntent::AddSegmentRequested);
    }
    if key_minus && !modifiers.command {
        events.push(AppIntent::DeleteLastSegmentRequested);
    }

    // Tab / Shift+Tab: nächster / vorheriger Pfad
    if key_tab && path_count > 1 {
        let index = if modifiers.shift {
            (active_path + path_count - 1) % path_count
        } else {
            (active_path + 1) % path_count
        };
        events.push(AppIntent::SwitchPathRequested { index });
    }

    events
}
