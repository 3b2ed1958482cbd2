//! Canvas-Input-Handling: Maus-Events → AppIntent in logischen Koordinaten.

use super::keyboard;
use crate::app::{AppIntent, AppState, HoverTarget};
use crate::render::CanvasTransform;
use glam::Vec2;

/// Verwaltet den Input-Zustand für den Canvas (Zeiger innen/außen, letzte Position)
#[derive(Default)]
pub struct InputState {
    pointer_inside: bool,
    last_pos: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_inside: false,
            last_pos: None,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Während eines Drags werden Bewegungen auch außerhalb des Canvas
    /// weitergereicht; die Pfad-Verwaltung begrenzt die Position selbst.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        transform: &CanvasTransform,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let is_dragging = state.paths.is_dragging();

        let (latest, pressed, released) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
            )
        });
        let inside = response.contains_pointer();

        if let Some(screen) = latest {
            if inside || is_dragging {
                let pos = transform.to_logical(screen);
                if self.last_pos != Some(pos) {
                    events.push(AppIntent::CanvasPointerMoved { pos });
                    self.last_pos = Some(pos);
                }
                if pressed && inside {
                    events.push(AppIntent::CanvasPointerPressed { pos });
                }
            }
        }

        if released {
            events.push(AppIntent::CanvasPointerReleased);
        }

        if self.pointer_inside && !inside {
            events.push(AppIntent::CanvasPointerLeft);
            self.last_pos = None;
        }
        self.pointer_inside = inside;

        if !ui.ctx().wants_keyboard_input() {
            events.extend(keyboard::collect_keyboard_intents(
                ui,
                state.active_path_index(),
                state.path_count(),
            ));
        }

        events
    }
}

/// Mauszeiger passend zum Element unter dem Zeiger.
pub fn cursor_for(hover: HoverTarget, is_dragging: bool) -> egui::CursorIcon {
    if is_dragging {
        return egui::CursorIcon::Grabbing;
    }
    match hover {
        HoverTarget::Point { .. } => egui::CursorIcon::Grab,
        HoverTarget::Curve(_) => egui::CursorIcon::PointingHand,
        HoverTarget::Empty => egui::CursorIcon::Default,
    }
}
