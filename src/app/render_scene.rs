//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderPath, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let active = state.paths.active_index();
    let options = &state.options;

    let paths = state
        .paths
        .curves()
        .iter()
        .enumerate()
        .map(|(index, curve)| {
            let is_active = index == active;
            let color = if is_active {
                curve.color().highlighted()
            } else {
                curve.color()
            };
            RenderPath {
                points: curve.points().to_vec(),
                color: color.to_rgba(),
                stroke_width: if is_active {
                    options.stroke_width_active
                } else {
                    options.stroke_width_inactive
                },
                is_active,
            }
        })
        .collect();

    RenderScene {
        paths,
        drag_point: state
            .paths
            .drag_state()
            .map(|drag| (drag.curve, drag.index)),
        hover: state.view.hover,
        canvas_size: options.canvas_size,
        field_rect: state.field_mapping().field_rect(),
        background: state.view.background_image.clone(),
        background_opacity: state.view.background_opacity,
        background_visible: state.view.background_visible,
        options: options.clone(),
    }
}
