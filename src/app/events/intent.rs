use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Canvas-Positionen liegen immer in logischen Canvas-Koordinaten vor.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Canvas-Zeiger ───────────────────────────────────────────────
    /// Primäre Maustaste auf dem Canvas gedrückt
    CanvasPointerPressed { pos: Vec2 },
    /// Zeiger über dem Canvas bewegt
    CanvasPointerMoved { pos: Vec2 },
    /// Primäre Maustaste losgelassen
    CanvasPointerReleased,
    /// Zeiger hat den Canvas verlassen
    CanvasPointerLeft,

    // ── Pfade ───────────────────────────────────────────────────────
    /// Neuen Pfad anlegen
    AddPathRequested,
    /// Aktiven Pfad löschen
    DeletePathRequested,
    /// Aktiven Pfad wechseln
    SwitchPathRequested { index: usize },
    /// Segment am Ende des aktiven Pfads anhängen
    AddSegmentRequested,
    /// Letztes Segment des aktiven Pfads entfernen
    DeleteLastSegmentRequested,
    /// Aktiven Pfad als Text exportieren
    ExportRequested,
    /// Alle Pfade verwerfen und mit einem Standardpfad neu beginnen
    ClearPathsRequested,

    // ── Hintergrund ─────────────────────────────────────────────────
    /// Hintergrundbild-Auswahldialog öffnen
    BackgroundImageSelectionRequested,
    /// Hintergrundbild wurde im Dialog gewählt
    BackgroundImageSelected { path: String },
    /// Hintergrund-Sichtbarkeit umschalten
    ToggleBackgroundVisibility,
    /// Hintergrund-Deckkraft setzen
    BackgroundOpacityChanged { opacity: f32 },

    // ── Dialoge & Anwendung ─────────────────────────────────────────
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Statusmeldung schließen
    StatusMessageDismissed,
    /// Anwendung beenden
    ExitRequested,
}
