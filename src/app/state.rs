//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{BackgroundImage, CurveSet, FieldMapping, HoverTarget};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::sync::Arc;

/// UI-bezogener Anwendungszustand (Dialoge, Statuszeile, Zwischenablage)
pub struct UiState {
    /// Ob der Hintergrundbild-Auswahl-Dialog geöffnet werden soll
    pub show_background_dialog: bool,
    /// Temporäre Statusnachricht (z.B. abgelehntes Löschen)
    pub status_message: Option<String>,
    /// Text, der im nächsten Frame in die Zwischenablage kopiert wird
    pub pending_clipboard: Option<String>,
    /// Zuletzt exportierter Pfadtext
    pub last_export: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_background_dialog: false,
            status_message: None,
            pending_clipboard: None,
            last_export: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// Hintergrundbild (optional)
    pub background_image: Option<Arc<BackgroundImage>>,
    /// Background-Opacity (0.0 = transparent, 1.0 = opak)
    pub background_opacity: f32,
    /// Background-Sichtbarkeit
    pub background_visible: bool,
    /// Signalisiert, dass das Hintergrundbild neu als Textur hochgeladen werden muss
    pub background_dirty: bool,
    /// Zeigerposition in Feldkoordinaten (None = Zeiger außerhalb)
    pub pointer_field_pos: Option<Vec2>,
    /// Element unter dem Zeiger
    pub hover: HoverTarget,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            background_image: None,
            background_opacity: 1.0,
            background_visible: true,
            background_dirty: false,
            pointer_field_pos: None,
            hover: HoverTarget::Empty,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Pfade inklusive Drag-Zustand
    pub paths: CurveSet,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Toleranzen)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen und einem Startpfad
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut view = ViewState::new();
        view.background_opacity = options.background_opacity;
        Self {
            paths: CurveSet::new(options.curve_set_config()),
            view,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Pfade zurück (für UI-Anzeige)
    pub fn path_count(&self) -> usize {
        self.paths.curve_count()
    }

    /// Index des aktiven Pfads
    pub fn active_path_index(&self) -> usize {
        self.paths.active_index()
    }

    /// Abbildung Canvas ↔ Feld für die aktuellen Optionen.
    pub fn field_mapping(&self) -> FieldMapping {
        self.options.field_mapping()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
