//! Use-Case-Funktionen für Pfad- und Segment-Bearbeitung.

use crate::app::AppState;
use crate::core::HoverTarget;

/// Legt hinter dem aktiven Pfad einen neuen Pfad an.
pub fn add_path(state: &mut AppState) {
    let index = state.paths.add_curve();
    state.ui.status_message = Some(format!("Pfad p{} angelegt", index));
}

/// Löscht den aktiven Pfad.
pub fn delete_active_path(state: &mut AppState) {
    let removed = state.paths.active_index();
    state.paths.delete_active_curve();
    state.view.hover = HoverTarget::Empty;
    state.ui.status_message = Some(format!("Pfad p{} gelöscht", removed));
}

/// Wechselt den aktiven Pfad.
pub fn set_active_path(state: &mut AppState, index: usize) {
    if state.paths.set_active_curve(index) {
        log::info!("Aktiver Pfad: {}", index);
    } else {
        log::warn!("Pfad {} existiert nicht", index);
    }
}

/// Hängt ein Segment an den aktiven Pfad an.
pub fn add_segment(state: &mut AppState) {
    state.paths.add_segment();
    log::info!(
        "Segment an Pfad {} angehängt ({} Segmente)",
        state.paths.active_index(),
        state.paths.active_curve().segment_count()
    );
}

/// Entfernt das letzte Segment des aktiven Pfads. Das erste Segment bleibt immer erhalten.
pub fn delete_last_segment(state: &mut AppState) {
    let index = state.paths.active_index();
    if state.paths.delete_last_segment() {
        log::info!(
            "Letztes Segment von Pfad {} entfernt ({} Segmente)",
            index,
            state.paths.active_curve().segment_count()
        );
    } else {
        log::warn!("Pfad {} hat nur ein Segment, Löschen abgelehnt", index);
        state.ui.status_message =
            Some("Das einzige Segment eines Pfads kann nicht gelöscht werden".to_string());
    }
}

/// Verwirft alle Pfade und beginnt mit einem Standardpfad.
pub fn reset_paths(state: &mut AppState) {
    state.paths.reset();
    state.view.hover = HoverTarget::Empty;
    state.ui.status_message = None;
    log::info!("Alle Pfade zurückgesetzt");
}
