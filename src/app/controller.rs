//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Canvas & Drag ===
            AppCommand::BeginDrag { pos } => handlers::canvas::begin_drag(state, pos),
            AppCommand::UpdateDrag { pos } => handlers::canvas::update_drag(state, pos),
            AppCommand::EndDrag => handlers::canvas::end_drag(state),
            AppCommand::PointerLeft => handlers::canvas::pointer_left(state),
            AppCommand::UpdatePointerReadout { pos } => {
                handlers::canvas::update_pointer_readout(state, pos)
            }
            AppCommand::ClearPointerReadout => handlers::canvas::clear_pointer_readout(state),

            // === Pfade ===
            AppCommand::AddPath => handlers::paths::add_path(state),
            AppCommand::DeleteActivePath => handlers::paths::delete_active_path(state),
            AppCommand::SetActivePath { index } => handlers::paths::set_active_path(state, index),
            AppCommand::AddSegment => handlers::paths::add_segment(state),
            AppCommand::DeleteLastSegment => handlers::paths::delete_last_segment(state),
            AppCommand::ResetPaths => handlers::paths::reset_paths(state),
            AppCommand::ExportActivePath => handlers::paths::export_active_path(state),

            // === Hintergrund ===
            AppCommand::RequestBackgroundImageDialog => {
                handlers::view::request_background_image_dialog(state)
            }
            AppCommand::LoadBackgroundImage { path } => {
                handlers::view::load_background_image(state, path)?
            }
            AppCommand::ToggleBackgroundVisibility => {
                handlers::view::toggle_background_visibility(state)
            }
            AppCommand::SetBackgroundOpacity { opacity } => {
                handlers::view::set_background_opacity(state, opacity)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::DismissStatusMessage => handlers::dialog::dismiss_status_message(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
