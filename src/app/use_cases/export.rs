//! Use-Case für den Text-Export des aktiven Pfads.

use crate::app::AppState;

/// Exportiert den aktiven Pfad in Feldkoordinaten.
///
/// Der Text wird als letzter Export gemerkt und für die Zwischenablage
/// vorgemerkt. Das Kopieren übernimmt der Host im nächsten Frame.
pub fn export_active_path(state: &mut AppState) {
    let mapping = state.field_mapping();
    let text = state.paths.export_active(&mapping);
    let index = state.paths.active_index();
    let segments = state.paths.active_curve().segment_count();

    log::info!("Pfad p{} exportiert ({} Segmente)", index, segments);
    log::debug!("Export:\n{}", text);

    state.ui.status_message = Some(format!(
        "Pfad p{} exportiert ({} Segmente) und in die Zwischenablage kopiert",
        index, segments
    ));
    state.ui.pending_clipboard = Some(text.clone());
    state.ui.last_export = Some(text);
}
