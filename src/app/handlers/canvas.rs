//! Handler für Zeiger-Events auf dem Canvas.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Startet einen Drag oder aktiviert einen Pfad unter dem Zeiger.
pub fn begin_drag(state: &mut AppState, pos: Vec2) {
    use_cases::drag::begin_drag(state, pos);
}

/// Führt den gezogenen Punkt nach.
pub fn update_drag(state: &mut AppState, pos: Vec2) {
    use_cases::drag::update_drag(state, pos);
}

/// Beendet einen laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}

/// Behandelt das Verlassen des Canvas.
pub fn pointer_left(state: &mut AppState) {
    use_cases::drag::pointer_left(state);
}

/// Aktualisiert Koordinatenanzeige und Hover-Ziel.
pub fn update_pointer_readout(state: &mut AppState, pos: Vec2) {
    use_cases::drag::update_pointer_readout(state, pos);
}

/// Leert die Koordinatenanzeige.
pub fn clear_pointer_readout(state: &mut AppState) {
    state.view.pointer_field_pos = None;
    state.view.hover = crate::core::HoverTarget::Empty;
}
