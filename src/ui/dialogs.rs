//! Datei-Dialoge.

use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Hintergrundbild-Auswahl-Dialog
    if ui_state.show_background_dialog {
        ui_state.show_background_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Bilddatei", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            events.push(AppIntent::BackgroundImageSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
