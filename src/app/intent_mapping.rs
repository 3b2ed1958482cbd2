//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasPointerPressed { pos } => vec![
            AppCommand::BeginDrag { pos },
            AppCommand::UpdatePointerReadout { pos },
        ],
        AppIntent::CanvasPointerMoved { pos } => {
            if state.paths.is_dragging() {
                vec![
                    AppCommand::UpdateDrag { pos },
                    AppCommand::UpdatePointerReadout { pos },
                ]
            } else {
                vec![AppCommand::UpdatePointerReadout { pos }]
            }
        }
        AppIntent::CanvasPointerReleased => {
            if state.paths.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::CanvasPointerLeft => {
            vec![AppCommand::PointerLeft, AppCommand::ClearPointerReadout]
        }

        AppIntent::AddPathRequested => vec![AppCommand::AddPath],
        AppIntent::DeletePathRequested => vec![AppCommand::DeleteActivePath],
        AppIntent::SwitchPathRequested { index } => {
            if index < state.path_count() {
                vec![AppCommand::SetActivePath { index }]
            } else {
                log::warn!(
                    "Pfadwechsel ignoriert: Index {} außerhalb (Anzahl {})",
                    index,
                    state.path_count()
                );
                Vec::new()
            }
        }
        AppIntent::AddSegmentRequested => vec![AppCommand::AddSegment],
        AppIntent::DeleteLastSegmentRequested => vec![AppCommand::DeleteLastSegment],
        AppIntent::ExportRequested => vec![AppCommand::ExportActivePath],
        AppIntent::ClearPathsRequested => vec![AppCommand::ResetPaths],

        AppIntent::BackgroundImageSelectionRequested => {
            vec![AppCommand::RequestBackgroundImageDialog]
        }
        AppIntent::BackgroundImageSelected { path } => {
            vec![AppCommand::LoadBackgroundImage { path }]
        }
        AppIntent::ToggleBackgroundVisibility => vec![AppCommand::ToggleBackgroundVisibility],
        AppIntent::BackgroundOpacityChanged { opacity } => {
            vec![AppCommand::SetBackgroundOpacity { opacity }]
        }

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::StatusMessageDismissed => vec![AppCommand::DismissStatusMessage],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
