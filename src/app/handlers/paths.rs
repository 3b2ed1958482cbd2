//! Handler für Pfad-Verwaltung und Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Legt einen neuen Pfad an.
pub fn add_path(state: &mut AppState) {
    use_cases::editing::add_path(state);
}

/// Löscht den aktiven Pfad.
pub fn delete_active_path(state: &mut AppState) {
    use_cases::editing::delete_active_path(state);
}

/// Wechselt den aktiven Pfad.
pub fn set_active_path(state: &mut AppState, index: usize) {
    use_cases::editing::set_active_path(state, index);
}

/// Hängt ein Segment an den aktiven Pfad an.
pub fn add_segment(state: &mut AppState) {
    use_cases::editing::add_segment(state);
}

/// Entfernt das letzte Segment des aktiven Pfads.
pub fn delete_last_segment(state: &mut AppState) {
    use_cases::editing::delete_last_segment(state);
}

/// Setzt alle Pfade zurück.
pub fn reset_paths(state: &mut AppState) {
    use_cases::editing::reset_paths(state);
}

/// Exportiert den aktiven Pfad.
pub fn export_active_path(state: &mut AppState) {
    use_cases::export::export_active_path(state);
}
