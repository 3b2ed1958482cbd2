use glam::Vec2;

use crate::app::{AppCommand, AppIntent, AppState};

use super::map_intent_to_commands;

#[test]
fn pointer_pressed_maps_to_begin_drag_then_readout() {
    let state = AppState::new();
    let pos = Vec2::new(240.0, 560.0);

    let commands = map_intent_to_commands(&state, AppIntent::CanvasPointerPressed { pos });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::BeginDrag { pos: p } if p == pos));
    assert!(matches!(commands[1], AppCommand::UpdatePointerReadout { .. }));
}

#[test]
fn pointer_moved_without_drag_only_updates_readout() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPointerMoved {
            pos: Vec2::new(10.0, 10.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::UpdatePointerReadout { .. }));
}

#[test]
fn pointer_moved_while_dragging_updates_drag_first() {
    let mut state = AppState::new();
    assert!(state.paths.handle_drag_start(Vec2::new(240.0, 560.0)));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPointerMoved {
            pos: Vec2::new(250.0, 550.0),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::UpdateDrag { .. }));
    assert!(matches!(commands[1], AppCommand::UpdatePointerReadout { .. }));
}

#[test]
fn pointer_released_without_drag_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::CanvasPointerReleased);

    assert!(commands.is_empty());
}

#[test]
fn pointer_left_maps_to_leave_and_clear_readout_in_order() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::CanvasPointerLeft);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::PointerLeft));
    assert!(matches!(commands[1], AppCommand::ClearPointerReadout));
}

#[test]
fn switch_path_out_of_range_is_dropped() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SwitchPathRequested { index: 3 });

    assert!(commands.is_empty());
}

#[test]
fn switch_path_in_range_maps_to_set_active() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SwitchPathRequested { index: 0 });

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SetActivePath { index: 0 }));
}

#[test]
fn background_image_selected_forwards_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::BackgroundImageSelected {
            path: "feld.png".to_string(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        &commands[0],
        AppCommand::LoadBackgroundImage { path } if path == "feld.png"
    ));
}
