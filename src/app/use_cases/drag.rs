//! Use-Case-Funktionen für Zeiger-Interaktion und Drag.

use crate::app::AppState;
use crate::core::{CoordinateMapping, HoverTarget};
use glam::Vec2;

/// Startet einen Drag oder aktiviert den getroffenen Pfad.
pub fn begin_drag(state: &mut AppState, pos: Vec2) {
    let points_before = state.paths.active_curve().len();
    if !state.paths.handle_drag_start(pos) {
        return;
    }

    if state.paths.is_dragging() {
        state.view.hover = dragged_target(state).unwrap_or_default();
    } else if state.paths.active_curve().len() != points_before {
        log::info!(
            "Punkt an Pfad {} angehängt ({} Punkte)",
            state.paths.active_index(),
            state.paths.active_curve().len()
        );
    }
}

/// Führt den gezogenen Punkt auf die Zeigerposition nach.
pub fn update_drag(state: &mut AppState, pos: Vec2) {
    state.paths.handle_drag_move(pos);
}

/// Beendet einen laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    state.paths.handle_drag_end();
}

/// Zeiger hat den Canvas verlassen.
pub fn pointer_left(state: &mut AppState) {
    if state.paths.handle_pointer_leave() {
        log::debug!("Drag beim Verlassen des Canvas abgebrochen");
    }
}

/// Rechnet die Zeigerposition in Feldkoordinaten um und aktualisiert das Hover-Ziel.
pub fn update_pointer_readout(state: &mut AppState, pos: Vec2) {
    let mapping = state.field_mapping();
    state.view.pointer_field_pos = Some(mapping.to_field(pos));
    state.view.hover = dragged_target(state).unwrap_or_else(|| state.paths.hover(pos));
}

fn dragged_target(state: &AppState) -> Option<HoverTarget> {
    state
        .paths
        .drag_state()
        .map(|drag| HoverTarget::Point {
            curve: drag.curve,
            index: drag.index,
        })
}
