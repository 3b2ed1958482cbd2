//! Handler für Hintergrundbild und Darstellung.

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Hintergrundbild-Dateidialog.
pub fn request_background_image_dialog(state: &mut AppState) {
    use_cases::background_image::request_background_image_dialog(state);
}

/// Lädt ein Hintergrundbild.
pub fn load_background_image(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::background_image::load_background_image(state, path)
}

/// Schaltet die Sichtbarkeit des Hintergrunds um.
pub fn toggle_background_visibility(state: &mut AppState) {
    use_cases::background_image::toggle_background_visibility(state);
}

/// Setzt die Hintergrund-Deckkraft.
pub fn set_background_opacity(state: &mut AppState, opacity: f32) {
    use_cases::background_image::set_background_opacity(state, opacity);
}
